use clap::Subcommand;

/// Role catalogue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RoleCommands {
    /// List roles.
    List,
}
