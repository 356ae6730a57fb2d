use serde::Serialize;

use aud_core::access::Action;
use aud_core::entities::RoleRecord;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RoleCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RoleRow {
    #[serde(flatten)]
    record: RoleRecord,
    internal: Option<bool>,
}

/// Handle `aud role`.
pub async fn handle(action: &RoleCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RoleCommands::List => {
            ctx.require(Action::ManageUsers)?;
            let roles = ctx.api.list_roles().await?;
            let rows: Vec<RoleRow> = roles
                .into_iter()
                .map(|record| RoleRow {
                    internal: record.role().map(aud_core::enums::Role::is_internal),
                    record,
                })
                .collect();
            output(&rows, flags.format)
        }
    }
}
