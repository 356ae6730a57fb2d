use serde_json::json;

use aud_core::access::{Action, Route};
use aud_core::entities::Process;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProcessCommands;
use crate::commands::shared::confirm::require_yes;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

/// Handle `aud process`.
pub async fn handle(
    action: &ProcessCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProcessCommands::List => {
            ctx.open(Route::Processes)?;
            let processes = ctx.api.list_processes().await?;
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            output(&apply_limit(processes, limit), flags.format)
        }
        ProcessCommands::Get { id } => {
            ctx.open(Route::Processes)?;
            output(&ctx.api.get_process(*id).await?, flags.format)
        }
        ProcessCommands::Create { name } => {
            ctx.require(Action::ManageProcesses)?;
            let process = Process {
                id: 0,
                name: process_name(name)?,
            };
            output(&ctx.api.create_process(&process).await?, flags.format)
        }
        ProcessCommands::Update { id, name } => {
            ctx.require(Action::ManageProcesses)?;
            let process = Process {
                id: *id,
                name: process_name(name)?,
            };
            ctx.api.update_process(*id, &process).await?;
            output(&json!({ "updated": true, "process": process }), flags.format)
        }
        ProcessCommands::Delete { id, yes } => {
            ctx.require(Action::ManageProcesses)?;
            require_yes(*yes, &format!("delete process {id}"))?;
            ctx.api.delete_process(*id).await?;
            output(&json!({ "deleted": true, "id": id }), flags.format)
        }
    }
}

fn process_name(raw: &str) -> anyhow::Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        anyhow::bail!("process name must not be empty");
    }
    Ok(name.to_string())
}
