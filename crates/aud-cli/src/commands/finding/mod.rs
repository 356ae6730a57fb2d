mod files;
mod form;
mod list;

use serde_json::json;

use aud_core::access::{self, Action, Route};
use aud_core::entities::FindingView;
use aud_core::enums::Role;
use aud_core::identity::SessionIdentity;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FindingCommands;
use crate::commands::shared::confirm::require_yes;
use crate::context::AppContext;
use crate::output::output;

/// Handle `aud finding <subcommand>`.
pub async fn handle(
    action: &FindingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FindingCommands::List { audit } => list::handle(audit.as_deref(), ctx, flags).await,
        FindingCommands::Get { id } => list::get(*id, ctx, flags).await,
        FindingCommands::Create {
            plan,
            activity,
            responsible,
            fields,
        } => form::create(*plan, *activity, *responsible, fields, ctx, flags).await,
        FindingCommands::Update {
            id,
            plan,
            activity,
            responsible,
            fields,
            follow_up,
        } => {
            let changes = form::FindingChanges {
                plan: *plan,
                activity: *activity,
                responsible: *responsible,
                fields,
                follow_up: follow_up.as_deref(),
            };
            form::update(*id, &changes, ctx, flags).await
        }
        FindingCommands::Delete { id, yes } => {
            ctx.open(Route::Findings)?;
            ctx.require(Action::DeleteFindings)?;
            require_yes(*yes, &format!("delete finding {id}"))?;
            ctx.api.delete_finding(*id).await?;
            output(&json!({ "deleted": true, "id": id }), flags.format)
        }
        FindingCommands::Files { action } => files::handle(action, ctx, flags).await,
    }
}

/// Client roles only reach findings of their own company.
async fn ensure_visible(id: i64, ctx: &AppContext) -> anyhow::Result<()> {
    if !ctx.role().is_some_and(Role::is_client) {
        return Ok(());
    }
    check_visible(&ctx.identity, ctx.api.list_finding_views().await?, id)
}

fn check_visible(identity: &SessionIdentity, views: Vec<FindingView>, id: i64) -> anyhow::Result<()> {
    if access::scope_findings(identity, views).iter().any(|view| view.id == id) {
        return Ok(());
    }
    anyhow::bail!("finding {id} is not visible to this session")
}
