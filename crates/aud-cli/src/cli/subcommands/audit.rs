use clap::Subcommand;

/// Audit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// List audits with company names.
    List {
        /// Include audits of every company.
        #[arg(long)]
        all: bool,
    },
    /// Get an audit by ID.
    Get { id: i64 },
    /// Create an audit. Status starts as `Pendiente` unless given.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        company: i64,
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end: Option<String>,
        /// Responsible auditor; must name an active internal user.
        #[arg(long)]
        lead_auditor: String,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Update an audit.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        company: Option<i64>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        lead_auditor: Option<String>,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an audit.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
