use clap::Subcommand;

/// Dashboard commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DashboardCommands {
    /// Plan workload by status, auditor and process.
    Activities {
        /// Only plans of this audit id.
        #[arg(long)]
        audit: Option<i64>,
    },
    /// Finding impact and compliance. Defaults to the first audit.
    Findings {
        /// Audit name.
        #[arg(long)]
        audit: Option<String>,
    },
    /// Plan ratings and process risk matrix. Defaults to the first audit.
    Plans {
        /// Audit name.
        #[arg(long)]
        audit: Option<String>,
    },
}
