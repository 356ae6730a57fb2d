use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with username and password and store the bearer token.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show the decoded session, role and permitted links.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub username: String,
    /// Password. Read from `AUD_PASSWORD` or stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}
