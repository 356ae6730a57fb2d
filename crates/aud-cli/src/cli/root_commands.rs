use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{
    ActivityCommands, AuditCommands, AuthCommands, CompanyCommands, DashboardCommands,
    FindingCommands, PlanCommands, ProcessCommands, RoleCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Navigation links offered to the signed-in role.
    Nav,
    /// Check whether the signed-in role may open a route.
    Route(RouteArgs),
    /// Companies.
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Role catalogue.
    Role {
        #[command(subcommand)]
        action: RoleCommands,
    },
    /// Audits.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Audit plans.
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Process catalogue.
    Process {
        #[command(subcommand)]
        action: ProcessCommands,
    },
    /// Activity catalogue.
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
    /// Findings and their attachments.
    Finding {
        #[command(subcommand)]
        action: FindingCommands,
    },
    /// Aggregated dashboards.
    Dashboard {
        #[command(subcommand)]
        action: DashboardCommands,
    },
    /// Dump the JSON schema of an entity payload.
    Schema(SchemaArgs),
}

/// Arguments for `aud route`.
#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    /// Route path, e.g. `/empresas` or `/dashboardh`.
    pub path: String,
}

/// Entities with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaEntity {
    Company,
    User,
    Role,
    Audit,
    Plan,
    Process,
    Activity,
    Finding,
    FindingView,
    Attachment,
    Session,
}

/// Arguments for `aud schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub entity: SchemaEntity,
}
