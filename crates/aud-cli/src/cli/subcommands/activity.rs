use clap::Subcommand;

/// Activity catalogue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ActivityCommands {
    /// List activities with their process names.
    List {
        /// Only activities of this process id.
        #[arg(long)]
        process: Option<i64>,
    },
    /// Get an activity by ID.
    Get { id: i64 },
    /// Create an activity.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        process: i64,
        #[arg(long)]
        criterion: Option<String>,
    },
    /// Update an activity.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        process: Option<i64>,
        #[arg(long)]
        criterion: Option<String>,
    },
    /// Delete an activity.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
