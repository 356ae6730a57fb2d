use serde::Serialize;
use serde_json::json;

use aud_core::access::{Action, Route};
use aud_core::entities::{Audit, Company, User, resolve_name};
use aud_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::commands::shared::confirm::require_yes;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::parse_optional_day;
use crate::context::AppContext;
use crate::output::output;

/// Values offered for the audit `estado` field.
const AUDIT_STATUSES: [&str; 3] = ["Pendiente", "En Proceso", "Completada"];

#[derive(Serialize)]
struct AuditRow {
    #[serde(flatten)]
    audit: Audit,
    company_name: String,
}

/// Handle `aud audit`.
pub async fn handle(action: &AuditCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuditCommands::List { all } => {
            ctx.open(Route::Audits)?;
            let audits = async {
                if *all {
                    ctx.api.list_all_audits().await
                } else {
                    ctx.api.list_audits().await
                }
            };
            let (audits, companies) = tokio::try_join!(audits, ctx.api.list_all_companies())?;
            let rows: Vec<AuditRow> = audits
                .into_iter()
                .map(|audit| AuditRow {
                    company_name: company_name(&companies, audit.company_id),
                    audit,
                })
                .collect();
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            output(&apply_limit(rows, limit), flags.format)
        }
        AuditCommands::Get { id } => {
            ctx.open(Route::Audits)?;
            let (audit, companies) =
                tokio::try_join!(ctx.api.get_audit(*id), ctx.api.list_all_companies())?;
            output(
                &AuditRow {
                    company_name: company_name(&companies, audit.company_id),
                    audit,
                },
                flags.format,
            )
        }
        AuditCommands::Create {
            name,
            company,
            start,
            end,
            lead_auditor,
            note,
            status,
        } => {
            ctx.require(Action::ManageAudits)?;
            let users = ctx.api.list_users().await?;
            let audit = Audit {
                id: 0,
                name: non_empty(name, "audit name")?,
                company_id: *company,
                start_date: parse_optional_day(start.as_deref(), "start date")?,
                end_date: parse_optional_day(end.as_deref(), "end date")?,
                lead_auditor: eligible_auditor(&users, lead_auditor)?,
                note: note.clone().unwrap_or_default(),
                status: audit_status(status.as_deref().unwrap_or(AUDIT_STATUSES[0]))?,
            };
            check_dates(&audit)?;
            output(&ctx.api.create_audit(&audit).await?, flags.format)
        }
        AuditCommands::Update {
            id,
            name,
            company,
            start,
            end,
            lead_auditor,
            note,
            status,
        } => {
            ctx.require(Action::ManageAudits)?;
            let mut audit = ctx.api.get_audit(*id).await?;
            if let Some(name) = name {
                audit.name = non_empty(name, "audit name")?;
            }
            if let Some(company) = company {
                audit.company_id = *company;
            }
            if let Some(start) = parse_optional_day(start.as_deref(), "start date")? {
                audit.start_date = Some(start);
            }
            if let Some(end) = parse_optional_day(end.as_deref(), "end date")? {
                audit.end_date = Some(end);
            }
            if let Some(lead) = lead_auditor {
                let users = ctx.api.list_users().await?;
                audit.lead_auditor = eligible_auditor(&users, lead)?;
            }
            if let Some(note) = note {
                audit.note.clone_from(note);
            }
            if let Some(status) = status {
                audit.status = audit_status(status)?;
            }
            check_dates(&audit)?;
            ctx.api.update_audit(*id, &audit).await?;
            output(&json!({ "updated": true, "audit": audit }), flags.format)
        }
        AuditCommands::Delete { id, yes } => {
            ctx.require(Action::ManageAudits)?;
            require_yes(*yes, &format!("delete audit {id}"))?;
            ctx.api.delete_audit(*id).await?;
            output(&json!({ "deleted": true, "id": id }), flags.format)
        }
    }
}

fn company_name(companies: &[Company], id: i64) -> String {
    resolve_name(companies, id, |c| c.id, |c| c.name.as_str()).to_string()
}

fn non_empty(raw: &str, field: &str) -> anyhow::Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        anyhow::bail!("{field} must not be empty");
    }
    Ok(value.to_string())
}

/// The responsible auditor is stored by display name and must be an active
/// administrator, supervisor or auditor.
fn eligible_auditor(users: &[User], name: &str) -> anyhow::Result<String> {
    let wanted = name.trim();
    users
        .iter()
        .filter(|user| user.active)
        .filter(|user| user.role().is_some_and(Role::is_internal))
        .find(|user| user.name.trim().eq_ignore_ascii_case(wanted))
        .map(|user| user.name.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("'{wanted}' is not an active administrator, supervisor or auditor")
        })
}

fn audit_status(raw: &str) -> anyhow::Result<String> {
    AUDIT_STATUSES
        .iter()
        .find(|status| status.eq_ignore_ascii_case(raw.trim()))
        .map(|status| (*status).to_string())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "invalid audit status '{raw}': expected one of {}",
                AUDIT_STATUSES.join(", ")
            )
        })
}

fn check_dates(audit: &Audit) -> anyhow::Result<()> {
    if let (Some(start), Some(end)) = (audit.start_date, audit.end_date)
        && end < start
    {
        anyhow::bail!("end date {end} is before start date {start}");
    }
    Ok(())
}
