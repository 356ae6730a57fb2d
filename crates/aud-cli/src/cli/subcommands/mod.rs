mod activity;
mod audit;
mod auth;
mod company;
mod dashboard;
mod finding;
mod plan;
mod process;
mod role;
mod user;

pub use activity::ActivityCommands;
pub use audit::AuditCommands;
pub use auth::{AuthCommands, AuthLoginArgs};
pub use company::CompanyCommands;
pub use dashboard::DashboardCommands;
pub use finding::{FileCommands, FileKindArg, FindingCommands, FindingFieldArgs};
pub use plan::PlanCommands;
pub use process::ProcessCommands;
pub use role::RoleCommands;
pub use user::{UserCommands, UserFieldArgs};
