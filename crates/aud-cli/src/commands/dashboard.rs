//! Dashboards: fetch the inputs in one fan-out, then aggregate locally.
//!
//! Plan-based boards aggregate every plan the backend returns. Own-plan
//! scoping applies to the plan list screen only.

use aud_core::access::{self, Action, Route};
use aud_core::dashboard::{ActivitiesDashboard, build_activities, build_findings, build_plans};
use aud_core::entities::{Audit, AuditPlan, Process, User};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DashboardCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress;

/// Handle `aud dashboard`.
pub async fn handle(
    action: &DashboardCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(Action::ViewDashboards)?;
    match action {
        DashboardCommands::Activities { audit } => {
            ctx.open(Route::ActivitiesDashboard)?;
            let (plans, users, audits, processes) = progress::track("loading activities", async {
                tokio::try_join!(
                    ctx.api.list_plans(),
                    ctx.api.list_all_users(),
                    ctx.api.list_all_audits(),
                    ctx.api.list_processes()
                )
            })
            .await?;
            output(&activities_board(&plans, &users, &audits, &processes, *audit), flags.format)
        }
        DashboardCommands::Findings { audit } => {
            ctx.open(Route::FindingsDashboard)?;
            let views = progress::track("loading findings", ctx.api.list_finding_views()).await?;
            let views = access::scope_findings(&ctx.identity, views);
            let board = build_findings(&views, audit.as_deref(), &ctx.report_options());
            output(&board, flags.format)
        }
        DashboardCommands::Plans { audit } => {
            ctx.open(Route::PlansDashboard)?;
            let (plans, processes, audits) = progress::track("loading audit plans", async {
                tokio::try_join!(
                    ctx.api.list_plans(),
                    ctx.api.list_processes(),
                    ctx.api.list_all_audits()
                )
            })
            .await?;
            let board = build_plans(&plans, &processes, &audits, audit.as_deref(), &ctx.report_options());
            output(&board, flags.format)
        }
    }
}

fn activities_board(
    plans: &[AuditPlan],
    users: &[User],
    audits: &[Audit],
    processes: &[Process],
    audit: Option<i64>,
) -> ActivitiesDashboard {
    build_activities(plans, users, audits, processes, audit)
}

#[cfg(test)]
mod tests {
    use aud_core::access::scope_plans;
    use aud_core::entities::{AuditPlan, User};
    use aud_core::identity::SessionIdentity;

    use super::activities_board;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.into(),
            username: name.to_lowercase(),
            email: String::new(),
            password: String::new(),
            role_id: 3,
            active: true,
            phone: String::new(),
            failed_attempts: 0,
            photo_base64: None,
            company_id: 1,
        }
    }

    fn plan(id: i64, auditor_id: i64) -> AuditPlan {
        AuditPlan {
            id,
            audit_id: 10,
            process_id: 1,
            activity_id: 1,
            auditor_id,
            start_date: None,
            end_date: None,
            status: "Pendiente".into(),
            rating: String::new(),
            drafted: false,
            reviewed: false,
            comments: String::new(),
            active: true,
        }
    }

    #[test]
    fn workload_covers_every_auditor_for_an_auditor_session() {
        let users = vec![user(42, "Mario"), user(7, "Sofia")];
        let plans = vec![plan(1, 42), plan(2, 7), plan(3, 7)];
        let auditor = SessionIdentity {
            role_id: Some(3),
            user_id: Some(42),
            company_id: None,
            display_name: None,
        };
        // the plan list would narrow this session to one plan
        assert_eq!(scope_plans(&auditor, plans.clone()).len(), 1);

        let board = activities_board(&plans, &users, &[], &[], None);
        assert_eq!(board.plan_count, 3);
        let names: Vec<&str> = board.auditors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Sofia", "Mario"]);
    }
}
