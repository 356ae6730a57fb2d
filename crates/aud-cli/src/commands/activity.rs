use serde::Serialize;
use serde_json::json;

use aud_core::access::{Action, Route};
use aud_core::entities::{Activity, Process, resolve_name};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ActivityCommands;
use crate::commands::shared::confirm::require_yes;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ActivityRow {
    #[serde(flatten)]
    activity: Activity,
    process_name: String,
}

/// Handle `aud activity`.
pub async fn handle(
    action: &ActivityCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ActivityCommands::List { process } => {
            ctx.open(Route::Activities)?;
            let (activities, processes) =
                tokio::try_join!(ctx.api.list_activities(), ctx.api.list_processes())?;
            let rows: Vec<ActivityRow> = activities
                .into_iter()
                .filter(|activity| process.is_none_or(|id| activity.process_id == id))
                .map(|activity| activity_row(activity, &processes))
                .collect();
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            output(&apply_limit(rows, limit), flags.format)
        }
        ActivityCommands::Get { id } => {
            ctx.open(Route::Activities)?;
            let (activity, processes) =
                tokio::try_join!(ctx.api.get_activity(*id), ctx.api.list_processes())?;
            output(&activity_row(activity, &processes), flags.format)
        }
        ActivityCommands::Create {
            name,
            process,
            criterion,
        } => {
            ctx.require(Action::ManageActivities)?;
            let activity = Activity {
                id: 0,
                name: activity_name(name)?,
                process_id: *process,
                criterion: criterion.clone().unwrap_or_default(),
            };
            output(&ctx.api.create_activity(&activity).await?, flags.format)
        }
        ActivityCommands::Update {
            id,
            name,
            process,
            criterion,
        } => {
            ctx.require(Action::ManageActivities)?;
            let mut activity = ctx.api.get_activity(*id).await?;
            if let Some(name) = name {
                activity.name = activity_name(name)?;
            }
            if let Some(process) = process {
                activity.process_id = *process;
            }
            if let Some(criterion) = criterion {
                activity.criterion.clone_from(criterion);
            }
            ctx.api.update_activity(*id, &activity).await?;
            output(&json!({ "updated": true, "activity": activity }), flags.format)
        }
        ActivityCommands::Delete { id, yes } => {
            ctx.require(Action::ManageActivities)?;
            require_yes(*yes, &format!("delete activity {id}"))?;
            ctx.api.delete_activity(*id).await?;
            output(&json!({ "deleted": true, "id": id }), flags.format)
        }
    }
}

fn activity_row(activity: Activity, processes: &[Process]) -> ActivityRow {
    ActivityRow {
        process_name: resolve_name(processes, activity.process_id, |p| p.id, |p| p.name.as_str())
            .to_string(),
        activity,
    }
}

fn activity_name(raw: &str) -> anyhow::Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        anyhow::bail!("activity name must not be empty");
    }
    Ok(name.to_string())
}
