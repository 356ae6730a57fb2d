use serde::Serialize;
use serde_json::json;

use aud_core::access::{Action, Route, scope_plans};
use aud_core::entities::{Activity, Audit, AuditPlan, Process, User, resolve_name};
use aud_core::enums::PlanStatus;
use aud_core::identity::SessionIdentity;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanCommands;
use crate::commands::shared::confirm::require_yes;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::{parse_optional_day, parse_rating, parse_status};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PlanRow {
    #[serde(flatten)]
    plan: AuditPlan,
    audit_name: String,
    process_name: String,
    activity_name: String,
    auditor_name: String,
}

/// Lookup tables used to label plan rows.
struct Lookups {
    audits: Vec<Audit>,
    processes: Vec<Process>,
    activities: Vec<Activity>,
    users: Vec<User>,
}

impl Lookups {
    async fn fetch(ctx: &AppContext) -> anyhow::Result<Self> {
        let (audits, processes, activities, users) = tokio::try_join!(
            ctx.api.list_all_audits(),
            ctx.api.list_processes(),
            ctx.api.list_activities(),
            ctx.api.list_all_users()
        )?;
        Ok(Self {
            audits,
            processes,
            activities,
            users,
        })
    }

    fn row(&self, plan: AuditPlan) -> PlanRow {
        PlanRow {
            audit_name: resolve_name(&self.audits, plan.audit_id, |a| a.id, |a| a.name.as_str()).to_string(),
            process_name: resolve_name(&self.processes, plan.process_id, |p| p.id, |p| p.name.as_str())
                .to_string(),
            activity_name: resolve_name(&self.activities, plan.activity_id, |a| a.id, |a| a.name.as_str())
                .to_string(),
            auditor_name: resolve_name(&self.users, plan.auditor_id, |u| u.id, |u| u.name.as_str()).to_string(),
            plan,
        }
    }
}

/// Handle `aud plan`.
pub async fn handle(action: &PlanCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PlanCommands::List { audit, status } => {
            ctx.open(Route::AuditPlans)?;
            let wanted_status = status.as_deref().map(parse_status).transpose()?;
            let (plans, lookups) = tokio::try_join!(
                async { ctx.api.list_plans().await.map_err(anyhow::Error::from) },
                Lookups::fetch(ctx)
            )?;
            let rows: Vec<PlanRow> = filter_plans(scope_plans(&ctx.identity, plans), *audit, wanted_status)
                .into_iter()
                .map(|plan| lookups.row(plan))
                .collect();
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            output(&apply_limit(rows, limit), flags.format)
        }
        PlanCommands::Get { id } => {
            ctx.open(Route::AuditPlans)?;
            let (plan, lookups) = tokio::try_join!(
                async { ctx.api.get_plan(*id).await.map_err(anyhow::Error::from) },
                Lookups::fetch(ctx)
            )?;
            ensure_visible(&ctx.identity, &plan)?;
            output(&lookups.row(plan), flags.format)
        }
        PlanCommands::Create {
            audit,
            process,
            activity,
            auditor,
            start,
            end,
        } => {
            ctx.require(Action::ManageAuditPlans)?;
            let plan = AuditPlan {
                id: 0,
                audit_id: *audit,
                process_id: *process,
                activity_id: *activity,
                auditor_id: *auditor,
                start_date: parse_optional_day(start.as_deref(), "start date")?,
                end_date: parse_optional_day(end.as_deref(), "end date")?,
                status: PlanStatus::Pending.as_str().to_string(),
                rating: String::new(),
                drafted: false,
                reviewed: false,
                comments: String::new(),
                active: true,
            };
            check_dates(&plan)?;
            output(&ctx.api.create_plan(&plan).await?, flags.format)
        }
        PlanCommands::Update {
            id,
            auditor,
            start,
            end,
            status,
            rating,
            drafted,
            reviewed,
            comments,
        } => {
            ctx.require(Action::ManageAuditPlans)?;
            let mut plan = ctx.api.get_plan(*id).await?;
            ensure_visible(&ctx.identity, &plan)?;
            if let Some(auditor) = auditor {
                plan.auditor_id = *auditor;
            }
            if let Some(start) = parse_optional_day(start.as_deref(), "start date")? {
                plan.start_date = Some(start);
            }
            if let Some(end) = parse_optional_day(end.as_deref(), "end date")? {
                plan.end_date = Some(end);
            }
            if let Some(raw) = status {
                set_status(&mut plan, raw)?;
            }
            if let Some(raw) = rating {
                plan.rating = parse_rating(raw)?.as_str().to_string();
            }
            if let Some(drafted) = drafted {
                plan.drafted = *drafted;
            }
            if let Some(reviewed) = reviewed {
                plan.reviewed = *reviewed;
            }
            if let Some(comments) = comments {
                plan.comments.clone_from(comments);
            }
            check_dates(&plan)?;
            ctx.api.update_plan(*id, &plan).await?;
            output(&json!({ "updated": true, "plan": plan }), flags.format)
        }
        PlanCommands::Deactivate { id, yes } => {
            ctx.require(Action::ManageAuditPlans)?;
            require_yes(*yes, &format!("deactivate plan {id}"))?;
            ensure_visible(&ctx.identity, &ctx.api.get_plan(*id).await?)?;
            ctx.api.deactivate_plan(*id).await?;
            output(&json!({ "deactivated": true, "id": id }), flags.format)
        }
    }
}

fn filter_plans(plans: Vec<AuditPlan>, audit: Option<i64>, status: Option<PlanStatus>) -> Vec<AuditPlan> {
    plans
        .into_iter()
        .filter(|plan| audit.is_none_or(|id| plan.audit_id == id))
        .filter(|plan| status.is_none_or(|wanted| plan.status() == Some(wanted)))
        .collect()
}

/// Auditors may only read or change plans assigned to them, and deactivated
/// plans are out of reach for everyone.
fn ensure_visible(identity: &SessionIdentity, plan: &AuditPlan) -> anyhow::Result<()> {
    if scope_plans(identity, vec![plan.clone()]).is_empty() {
        anyhow::bail!("plan {} is not visible to this session", plan.id);
    }
    Ok(())
}

/// Any known status may be set from any other; there is no workflow.
fn set_status(plan: &mut AuditPlan, raw: &str) -> anyhow::Result<()> {
    plan.status = parse_status(raw)?.as_str().to_string();
    Ok(())
}

fn check_dates(plan: &AuditPlan) -> anyhow::Result<()> {
    if let (Some(start), Some(end)) = (plan.start_date, plan.end_date)
        && end < start
    {
        anyhow::bail!("end date {end} is before start date {start}");
    }
    Ok(())
}
