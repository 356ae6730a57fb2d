use clap::Subcommand;

/// Process catalogue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProcessCommands {
    /// List processes.
    List,
    /// Get a process by ID.
    Get { id: i64 },
    /// Create a process.
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename a process.
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Delete a process.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
