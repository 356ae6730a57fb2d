//! Role-gated visibility.
//!
//! Every role-conditional decision of the client is answered from one static
//! permission table keyed by `(Role, Action)`. Navigation links, route guards,
//! finding field gates and row scoping are derived from it.
//!
//! The role comes from an unverified token claim. These rules decide what the
//! client offers; the backend remains responsible for authorization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{AuditPlan, FindingView};
use crate::enums::Role;
use crate::errors::CoreError;
use crate::identity::SessionIdentity;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A role-gated capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ViewDashboards,
    ManageAuditPlans,
    ViewFindings,
    EditFindings,
    DeleteFindings,
    EditFollowUp,
    UploadFollowUpFiles,
    UploadAnnexes,
    FilterFindingsByAudit,
    ManageAudits,
    ManageCompanies,
    ManageUsers,
    ManageProcesses,
    ManageActivities,
}

impl Action {
    pub const ALL: [Self; 14] = [
        Self::ViewDashboards,
        Self::ManageAuditPlans,
        Self::ViewFindings,
        Self::EditFindings,
        Self::DeleteFindings,
        Self::EditFollowUp,
        Self::UploadFollowUpFiles,
        Self::UploadAnnexes,
        Self::FilterFindingsByAudit,
        Self::ManageAudits,
        Self::ManageCompanies,
        Self::ManageUsers,
        Self::ManageProcesses,
        Self::ManageActivities,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewDashboards => "view_dashboards",
            Self::ManageAuditPlans => "manage_audit_plans",
            Self::ViewFindings => "view_findings",
            Self::EditFindings => "edit_findings",
            Self::DeleteFindings => "delete_findings",
            Self::EditFollowUp => "edit_follow_up",
            Self::UploadFollowUpFiles => "upload_follow_up_files",
            Self::UploadAnnexes => "upload_annexes",
            Self::FilterFindingsByAudit => "filter_findings_by_audit",
            Self::ManageAudits => "manage_audits",
            Self::ManageCompanies => "manage_companies",
            Self::ManageUsers => "manage_users",
            Self::ManageProcesses => "manage_processes",
            Self::ManageActivities => "manage_activities",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Permission table
// ---------------------------------------------------------------------------

const Y: bool = true;
const N: bool = false;

/// Columns are role ids 1 through 5.
#[rustfmt::skip]
const PERMISSIONS: [(Action, [bool; 5]); 14] = [
    //                               adm sup aud c-r c-v
    (Action::ViewDashboards,        [Y,  Y,  Y,  N,  N]),
    (Action::ManageAuditPlans,      [Y,  Y,  Y,  N,  N]),
    (Action::ViewFindings,          [Y,  Y,  Y,  Y,  Y]),
    (Action::EditFindings,          [Y,  Y,  Y,  N,  N]),
    (Action::DeleteFindings,        [Y,  Y,  Y,  N,  N]),
    (Action::EditFollowUp,          [N,  N,  N,  Y,  N]),
    (Action::UploadFollowUpFiles,   [N,  N,  N,  Y,  N]),
    (Action::UploadAnnexes,         [Y,  Y,  Y,  N,  N]),
    (Action::FilterFindingsByAudit, [Y,  Y,  Y,  N,  N]),
    (Action::ManageAudits,          [Y,  Y,  Y,  N,  N]),
    (Action::ManageCompanies,       [Y,  Y,  Y,  N,  N]),
    (Action::ManageUsers,           [Y,  Y,  Y,  N,  N]),
    (Action::ManageProcesses,       [Y,  Y,  Y,  N,  N]),
    (Action::ManageActivities,      [Y,  Y,  Y,  N,  N]),
];

/// Whether `role` may perform `action`.
#[must_use]
pub fn permits(role: Role, action: Action) -> bool {
    let column = match role {
        Role::Administrator => 0,
        Role::Supervisor => 1,
        Role::Auditor => 2,
        Role::ClientResponsible => 3,
        Role::ClientViewer => 4,
    };
    PERMISSIONS
        .iter()
        .find(|(candidate, _)| *candidate == action)
        .is_some_and(|(_, row)| row[column])
}

/// Like [`permits`], for a possibly unknown role. Unknown roles get nothing.
#[must_use]
pub fn role_permits(role: Option<Role>, action: Action) -> bool {
    role.is_some_and(|role| permits(role, action))
}

/// Fail with [`CoreError::Forbidden`] unless the role permits `action`.
///
/// # Errors
///
/// Returns [`CoreError::Forbidden`] when the action is not granted.
pub fn ensure(role: Option<Role>, action: Action) -> Result<(), CoreError> {
    if role_permits(role, action) {
        Ok(())
    } else {
        Err(CoreError::forbidden(role, action))
    }
}

/// Every action granted to `role`, in table order.
#[must_use]
pub fn granted_actions(role: Option<Role>) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| role_permits(role, *action))
        .collect()
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// A screen of the application, addressed by its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Root,
    Welcome,
    Findings,
    ActivitiesDashboard,
    FindingsDashboard,
    PlansDashboard,
    AuditPlans,
    Audits,
    Companies,
    CompanyForm,
    Users,
    Processes,
    Activities,
}

impl Route {
    pub const ALL: [Self; 14] = [
        Self::Login,
        Self::Root,
        Self::Welcome,
        Self::Findings,
        Self::ActivitiesDashboard,
        Self::FindingsDashboard,
        Self::PlansDashboard,
        Self::AuditPlans,
        Self::Audits,
        Self::Companies,
        Self::CompanyForm,
        Self::Users,
        Self::Processes,
        Self::Activities,
    ];

    /// Canonical path. `CompanyForm` covers `/empresas/new` and `/empresas/{id}`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Root => "/",
            Self::Welcome => "/welcomeB",
            Self::Findings => "/hallazgos",
            Self::ActivitiesDashboard => "/dashboard",
            Self::FindingsDashboard => "/dashboardh",
            Self::PlansDashboard => "/dashboardPA",
            Self::AuditPlans => "/planaud",
            Self::Audits => "/auditorias",
            Self::Companies => "/empresas",
            Self::CompanyForm => "/empresas/new",
            Self::Users => "/usuarios",
            Self::Processes => "/procesos",
            Self::Activities => "/actividades",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Root => "Home",
            Self::Welcome => "Welcome",
            Self::Findings => "Findings",
            Self::ActivitiesDashboard => "Activities dashboard",
            Self::FindingsDashboard => "Findings dashboard",
            Self::PlansDashboard => "Audit plan dashboard",
            Self::AuditPlans => "Audit plans",
            Self::Audits => "Audits",
            Self::Companies => "Companies",
            Self::CompanyForm => "Company form",
            Self::Users => "Users",
            Self::Processes => "Processes",
            Self::Activities => "Activities",
        }
    }

    /// Resolve a path. Matching ignores letter case and a trailing slash.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        if let Some(rest) = strip_prefix_ignore_case(normalized, "/empresas/") {
            let is_form = rest.eq_ignore_ascii_case("new")
                || (!rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()));
            return is_form.then_some(Self::CompanyForm);
        }

        Self::ALL
            .into_iter()
            .filter(|route| *route != Self::CompanyForm)
            .find(|route| route.path().eq_ignore_ascii_case(normalized))
    }

    /// Action a role needs to open the route. `None` means any signed-in user.
    #[must_use]
    pub const fn required_action(self) -> Option<Action> {
        match self {
            Self::Login | Self::Root | Self::Welcome => None,
            Self::Findings => Some(Action::ViewFindings),
            Self::ActivitiesDashboard | Self::FindingsDashboard | Self::PlansDashboard => {
                Some(Action::ViewDashboards)
            }
            Self::AuditPlans => Some(Action::ManageAuditPlans),
            Self::Audits => Some(Action::ManageAudits),
            Self::Companies | Self::CompanyForm => Some(Action::ManageCompanies),
            Self::Users => Some(Action::ManageUsers),
            Self::Processes => Some(Action::ManageProcesses),
            Self::Activities => Some(Action::ManageActivities),
        }
    }

    /// Routes behind the administrative gate.
    #[must_use]
    pub const fn is_administrative(self) -> bool {
        !matches!(
            self,
            Self::Login | Self::Root | Self::Welcome | Self::Findings
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

// ---------------------------------------------------------------------------
// Navigation and guards
// ---------------------------------------------------------------------------

const INTERNAL_NAV: [Route; 10] = [
    Route::ActivitiesDashboard,
    Route::FindingsDashboard,
    Route::PlansDashboard,
    Route::AuditPlans,
    Route::Findings,
    Route::Audits,
    Route::Companies,
    Route::Users,
    Route::Processes,
    Route::Activities,
];

const CLIENT_NAV: [Route; 2] = [Route::Findings, Route::Welcome];

/// Links offered by the navigation shell. Unknown roles get none.
#[must_use]
pub fn nav_links(role: Option<Role>) -> &'static [Route] {
    match role {
        Some(role) if role.is_internal() => &INTERNAL_NAV,
        Some(_) => &CLIENT_NAV,
        None => &[],
    }
}

/// Landing route after sign-in.
#[must_use]
pub fn initial_route(role: Option<Role>) -> Route {
    match role {
        Some(role) if role.is_client() => Route::Welcome,
        _ => Route::Findings,
    }
}

/// Outcome of a route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

/// Decide whether a session may open `route`.
///
/// `session` is `None` when no token is present.
#[must_use]
pub fn guard(route: Route, session: Option<&SessionIdentity>) -> RouteDecision {
    let Some(session) = session else {
        return if route == Route::Login {
            RouteDecision::Allow
        } else {
            RouteDecision::Redirect(Route::Login)
        };
    };

    let role = session.role();
    match route {
        Route::Login | Route::Root => RouteDecision::Redirect(initial_route(role)),
        Route::Welcome | Route::Findings => RouteDecision::Allow,
        _ => match route.required_action() {
            Some(action) if !role_permits(role, action) => {
                RouteDecision::Redirect(initial_route(role))
            }
            _ => RouteDecision::Allow,
        },
    }
}

// ---------------------------------------------------------------------------
// Finding form and list gates
// ---------------------------------------------------------------------------

/// Editable parts of the finding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FindingField {
    Plan,
    Activity,
    Responsible,
    ImpactAmount,
    Rating,
    Description,
    Risk,
    Recommendations,
    ActionPlan,
    CommitmentDate,
    Compliant,
    FollowUp,
    FollowUpFiles,
    Annexes,
}

impl FindingField {
    /// Form order.
    pub const ALL: [Self; 14] = [
        Self::Plan,
        Self::Activity,
        Self::Responsible,
        Self::ImpactAmount,
        Self::Rating,
        Self::Description,
        Self::Risk,
        Self::Recommendations,
        Self::ActionPlan,
        Self::CommitmentDate,
        Self::Compliant,
        Self::FollowUp,
        Self::FollowUpFiles,
        Self::Annexes,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Activity => "activity",
            Self::Responsible => "responsible",
            Self::ImpactAmount => "impact_amount",
            Self::Rating => "rating",
            Self::Description => "description",
            Self::Risk => "risk",
            Self::Recommendations => "recommendations",
            Self::ActionPlan => "action_plan",
            Self::CommitmentDate => "commitment_date",
            Self::Compliant => "compliant",
            Self::FollowUp => "follow_up",
            Self::FollowUpFiles => "follow_up_files",
            Self::Annexes => "annexes",
        }
    }

    /// The action that unlocks this field.
    #[must_use]
    pub const fn gate(self) -> Action {
        match self {
            Self::FollowUp => Action::EditFollowUp,
            Self::FollowUpFiles => Action::UploadFollowUpFiles,
            Self::Annexes => Action::UploadAnnexes,
            _ => Action::EditFindings,
        }
    }
}

impl fmt::Display for FindingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `role` may change `field` on the finding form.
#[must_use]
pub fn field_editable(role: Option<Role>, field: FindingField) -> bool {
    role_permits(role, field.gate())
}

/// Row-level actions offered in the findings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    EditFollowUp,
    Edit,
    Delete,
}

/// Actions shown on each findings list row for `role`.
#[must_use]
pub fn finding_row_actions(role: Option<Role>) -> Vec<RowAction> {
    let mut actions = Vec::new();
    if role_permits(role, Action::EditFollowUp) {
        actions.push(RowAction::EditFollowUp);
    }
    if role_permits(role, Action::EditFindings) {
        actions.push(RowAction::Edit);
    }
    if role_permits(role, Action::DeleteFindings) {
        actions.push(RowAction::Delete);
    }
    actions
}

// ---------------------------------------------------------------------------
// Row scoping
// ---------------------------------------------------------------------------

/// Restrict finding rows to what the session may see.
///
/// Client roles only see findings of their own company (`typ` claim). A client
/// session without a company claim sees nothing.
#[must_use]
pub fn scope_findings(session: &SessionIdentity, rows: Vec<FindingView>) -> Vec<FindingView> {
    match session.role() {
        Some(role) if role.is_client() => rows
            .into_iter()
            .filter(|row| session.company_id == Some(row.company_id))
            .collect(),
        _ => rows,
    }
}

/// Restrict audit plans to what the session may see.
///
/// Inactive plans are always hidden; auditors only see plans assigned to them.
#[must_use]
pub fn scope_plans(session: &SessionIdentity, rows: Vec<AuditPlan>) -> Vec<AuditPlan> {
    let own_only = session.role() == Some(Role::Auditor);
    rows.into_iter()
        .filter(|plan| plan.active)
        .filter(|plan| !own_only || session.user_id == Some(plan.auditor_id))
        .collect()
}
