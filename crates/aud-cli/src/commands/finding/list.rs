//! Findings list and detail.
//!
//! Rows come from the denormalised view and are scoped to the session's
//! company for client roles before any filter is applied.

use serde::Serialize;

use aud_core::access::{self, Action, FindingField, Route, RowAction};
use aud_core::entities::{Finding, FindingView, UNKNOWN_LABEL};
use aud_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct FindingRow {
    #[serde(flatten)]
    view: FindingView,
    impact: String,
    actions: Vec<RowAction>,
}

#[derive(Serialize)]
struct FindingDetail {
    #[serde(flatten)]
    finding: Finding,
    audit_name: String,
    process_name: String,
    activity_name: String,
    responsible_name: String,
    impact: String,
    editable_fields: Vec<FindingField>,
}

pub(super) async fn handle(
    audit: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.open(Route::Findings)?;
    if audit.is_some() {
        ctx.require(Action::FilterFindingsByAudit)?;
    }
    let views = access::scope_findings(&ctx.identity, ctx.api.list_finding_views().await?);
    let options = ctx.report_options();
    let actions = access::finding_row_actions(ctx.role());

    let rows: Vec<FindingRow> = filter_by_audit(views, audit)
        .into_iter()
        .map(|view| FindingRow {
            impact: options.money(view.impact_amount),
            actions: actions.clone(),
            view,
        })
        .collect();
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    output(&apply_limit(rows, limit), flags.format)
}

pub(super) async fn get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.open(Route::Findings)?;
    let (finding, views) = tokio::try_join!(ctx.api.get_finding(id), ctx.api.list_finding_views())?;
    let view = access::scope_findings(&ctx.identity, views)
        .into_iter()
        .find(|view| view.id == id);
    let Some(view) = view else {
        if ctx.role().is_some_and(Role::is_client) {
            anyhow::bail!("finding {id} is not visible to this session");
        }
        return output(&detail(finding, None, ctx), flags.format);
    };
    output(&detail(finding, Some(&view), ctx), flags.format)
}

fn detail(finding: Finding, view: Option<&FindingView>, ctx: &AppContext) -> FindingDetail {
    FindingDetail {
        audit_name: view_label(view, |v| &v.audit_name),
        process_name: view_label(view, |v| &v.process_name),
        activity_name: view_label(view, |v| &v.activity_name),
        responsible_name: view_label(view, |v| &v.responsible_name),
        impact: ctx.report_options().money(finding.impact_amount),
        editable_fields: editable_fields(ctx.role()),
        finding,
    }
}

fn view_label(view: Option<&FindingView>, pick: impl Fn(&FindingView) -> &String) -> String {
    view.map_or_else(|| UNKNOWN_LABEL.to_string(), |v| pick(v).clone())
}

/// Form fields the role may change.
pub(super) fn editable_fields(role: Option<Role>) -> Vec<FindingField> {
    FindingField::ALL
        .into_iter()
        .filter(|field| access::field_editable(role, *field))
        .collect()
}

fn filter_by_audit(views: Vec<FindingView>, audit: Option<&str>) -> Vec<FindingView> {
    let Some(wanted) = audit.map(str::trim).filter(|name| !name.is_empty()) else {
        return views;
    };
    views
        .into_iter()
        .filter(|view| view.audit_name.eq_ignore_ascii_case(wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use aud_core::access::FindingField;
    use aud_core::entities::FindingView;
    use aud_core::enums::Role;

    use super::{editable_fields, filter_by_audit};

    fn view(id: i64, audit: &str) -> FindingView {
        FindingView {
            id,
            audit_id: 0,
            audit_name: audit.into(),
            process_name: String::new(),
            activity_name: String::new(),
            impact_amount: 0.0,
            rating: "NCB".into(),
            description: String::new(),
            risk: String::new(),
            follow_up: String::new(),
            recommendations: String::new(),
            action_plan: String::new(),
            responsible_name: String::new(),
            commitment_date: None,
            compliant: false,
            user_id: 0,
            role_id: 4,
            company_id: 1,
        }
    }

    #[test]
    fn audit_filter_matches_names() {
        let views = vec![view(1, "Auditoria 2024"), view(2, "Auditoria 2025")];
        let ids: Vec<i64> = filter_by_audit(views.clone(), Some("auditoria 2025"))
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(filter_by_audit(views, Some("  ")).len(), 2);
    }

    #[test]
    fn client_responsible_edits_follow_up_only() {
        assert_eq!(
            editable_fields(Some(Role::ClientResponsible)),
            vec![FindingField::FollowUp, FindingField::FollowUpFiles]
        );
        assert!(editable_fields(Some(Role::ClientViewer)).is_empty());
        let auditor = editable_fields(Some(Role::Auditor));
        assert!(auditor.contains(&FindingField::Annexes));
        assert!(!auditor.contains(&FindingField::FollowUp));
    }
}
