//! Finding create and update with per-field role gates.

use serde_json::json;

use aud_core::access::{self, Action, FindingField, Route};
use aud_core::entities::Finding;
use aud_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FindingFieldArgs;
use crate::commands::shared::parse::{parse_optional_day, parse_rating};
use crate::context::AppContext;
use crate::output::output;

/// Values supplied to `aud finding update`.
pub(super) struct FindingChanges<'a> {
    pub plan: Option<i64>,
    pub activity: Option<i64>,
    pub responsible: Option<i64>,
    pub fields: &'a FindingFieldArgs,
    pub follow_up: Option<&'a str>,
}

impl FindingChanges<'_> {
    /// Form fields this update touches, in form order.
    fn touched(&self) -> Vec<FindingField> {
        let f = self.fields;
        [
            (FindingField::Plan, self.plan.is_some()),
            (FindingField::Activity, self.activity.is_some()),
            (FindingField::Responsible, self.responsible.is_some()),
            (FindingField::ImpactAmount, f.impact.is_some()),
            (FindingField::Rating, f.rating.is_some()),
            (FindingField::Description, f.description.is_some()),
            (FindingField::Risk, f.risk.is_some()),
            (FindingField::Recommendations, f.recommendations.is_some()),
            (FindingField::ActionPlan, f.action_plan.is_some()),
            (FindingField::CommitmentDate, f.commitment_date.is_some()),
            (FindingField::Compliant, f.compliant.is_some()),
            (FindingField::FollowUp, self.follow_up.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }

    fn apply(&self, finding: &mut Finding) -> anyhow::Result<()> {
        if let Some(plan) = self.plan {
            finding.plan_id = plan;
        }
        if let Some(activity) = self.activity {
            finding.activity_id = activity;
        }
        if let Some(responsible) = self.responsible {
            finding.responsible_id = responsible;
        }
        apply_fields(finding, self.fields)?;
        if let Some(follow_up) = self.follow_up {
            finding.follow_up = follow_up.to_string();
        }
        Ok(())
    }
}

/// Fail when `role` may not change every field in `fields`.
fn check_fields(role: Option<Role>, fields: &[FindingField]) -> anyhow::Result<()> {
    let denied: Vec<&str> = fields
        .iter()
        .filter(|field| !access::field_editable(role, **field))
        .map(|field| field.as_str())
        .collect();
    if denied.is_empty() {
        return Ok(());
    }
    anyhow::bail!(
        "role '{}' may not change: {}",
        role.map_or("unknown", Role::as_str),
        denied.join(", ")
    )
}

fn apply_fields(finding: &mut Finding, fields: &FindingFieldArgs) -> anyhow::Result<()> {
    if let Some(impact) = fields.impact {
        if !impact.is_finite() || impact < 0.0 {
            anyhow::bail!("impact amount must be a non-negative number");
        }
        finding.impact_amount = impact;
    }
    if let Some(rating) = &fields.rating {
        finding.rating = parse_rating(rating)?.as_str().to_string();
    }
    if let Some(description) = &fields.description {
        finding.description.clone_from(description);
    }
    if let Some(risk) = &fields.risk {
        finding.risk.clone_from(risk);
    }
    if let Some(recommendations) = &fields.recommendations {
        finding.recommendations.clone_from(recommendations);
    }
    if let Some(action_plan) = &fields.action_plan {
        finding.action_plan.clone_from(action_plan);
    }
    if let Some(date) = parse_optional_day(fields.commitment_date.as_deref(), "commitment date")? {
        finding.commitment_date = Some(date);
    }
    if let Some(compliant) = fields.compliant {
        finding.compliant = compliant;
    }
    Ok(())
}

pub(super) async fn create(
    plan: i64,
    activity: i64,
    responsible: i64,
    fields: &FindingFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.open(Route::Findings)?;
    ctx.require(Action::EditFindings)?;
    if fields.rating.is_none() {
        anyhow::bail!("--rating is required when creating a finding");
    }
    let mut finding = Finding {
        id: 0,
        plan_id: plan,
        activity_id: activity,
        responsible_id: responsible,
        impact_amount: 0.0,
        rating: String::new(),
        description: String::new(),
        risk: String::new(),
        recommendations: String::new(),
        action_plan: String::new(),
        follow_up: String::new(),
        commitment_date: None,
        compliant: false,
        follow_up_files: Vec::new(),
    };
    apply_fields(&mut finding, fields)?;
    output(&ctx.api.create_finding(&finding).await?, flags.format)
}

pub(super) async fn update(
    id: i64,
    changes: &FindingChanges<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.open(Route::Findings)?;
    let touched = changes.touched();
    if touched.is_empty() {
        anyhow::bail!("nothing to update for finding {id}");
    }
    check_fields(ctx.role(), &touched)?;

    super::ensure_visible(id, ctx).await?;

    let mut finding = ctx.api.get_finding(id).await?;
    changes.apply(&mut finding)?;
    tracing::debug!(finding = id, fields = ?touched, "updating finding");
    ctx.api.update_finding(id, &finding).await?;
    let changed: Vec<&str> = touched.iter().map(|field| field.as_str()).collect();
    output(
        &json!({ "updated": true, "id": id, "fields": changed }),
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use aud_core::access::FindingField;
    use aud_core::enums::Role;

    use super::{FindingChanges, check_fields};
    use crate::cli::subcommands::FindingFieldArgs;

    #[test]
    fn touched_fields_follow_form_order() {
        let fields = FindingFieldArgs {
            rating: Some("NCM".into()),
            compliant: Some(true),
            ..FindingFieldArgs::default()
        };
        let changes = FindingChanges {
            plan: Some(2),
            activity: None,
            responsible: None,
            fields: &fields,
            follow_up: Some("Se corrigio el proceso"),
        };
        assert_eq!(
            changes.touched(),
            vec![
                FindingField::Plan,
                FindingField::Rating,
                FindingField::Compliant,
                FindingField::FollowUp,
            ]
        );
    }

    #[test]
    fn client_responsible_only_writes_follow_up() {
        let role = Some(Role::ClientResponsible);
        assert!(check_fields(role, &[FindingField::FollowUp]).is_ok());
        let err = check_fields(role, &[FindingField::FollowUp, FindingField::Rating, FindingField::Risk])
            .expect_err("rating is not editable");
        assert!(err.to_string().ends_with("may not change: rating, risk"));
    }

    #[test]
    fn internal_roles_cannot_write_follow_up() {
        assert!(check_fields(Some(Role::Auditor), &[FindingField::Description]).is_ok());
        assert!(check_fields(Some(Role::Supervisor), &[FindingField::FollowUp]).is_err());
        assert!(check_fields(None, &[FindingField::Description]).is_err());
    }
}
