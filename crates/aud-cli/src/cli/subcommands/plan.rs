use clap::Subcommand;

/// Audit plan commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// List active plans visible to the signed-in role.
    List {
        /// Only plans of this audit id.
        #[arg(long)]
        audit: Option<i64>,
        /// Only plans with this status (Pendiente, En Proceso, Listo).
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a plan by ID.
    Get { id: i64 },
    /// Create a plan. New plans start as `Pendiente` and active.
    Create {
        #[arg(long)]
        audit: i64,
        #[arg(long)]
        process: i64,
        #[arg(long)]
        activity: i64,
        /// Assigned auditor user id.
        #[arg(long)]
        auditor: i64,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Update a plan.
    Update {
        id: i64,
        #[arg(long)]
        auditor: Option<i64>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Semaforo rating: NCA, NCM, NCB, OM or C.
        #[arg(long)]
        rating: Option<String>,
        #[arg(long)]
        drafted: Option<bool>,
        #[arg(long)]
        reviewed: Option<bool>,
        #[arg(long)]
        comments: Option<String>,
    },
    /// Deactivate a plan. It is hidden from lists but kept by the backend.
    Deactivate {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}
