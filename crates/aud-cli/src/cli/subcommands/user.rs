use std::path::PathBuf;

use clap::{Args, Subcommand};

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users with their role names.
    List {
        /// Include deactivated users.
        #[arg(long)]
        all: bool,
    },
    /// Get a user by ID.
    Get { id: i64 },
    /// Create a user.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Role id (1-5).
        #[arg(long)]
        role: i64,
        #[arg(long)]
        company: i64,
        #[command(flatten)]
        fields: UserFieldArgs,
    },
    /// Update a user.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<i64>,
        #[arg(long)]
        company: Option<i64>,
        /// Reactivate (`true`) or deactivate (`false`) the account.
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        fields: UserFieldArgs,
    },
    /// Deactivate a user. The account is kept with `estatus = false`.
    Deactivate {
        id: i64,
        /// Confirm the deactivation.
        #[arg(long)]
        yes: bool,
    },
}

/// Optional user fields shared by create and update.
#[derive(Clone, Debug, Default, Args)]
pub struct UserFieldArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Profile photo file, sent base64-encoded.
    #[arg(long)]
    pub photo: Option<PathBuf>,
}
