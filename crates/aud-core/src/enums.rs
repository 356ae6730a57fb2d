//! Categorical enums shared across the audit client.
//!
//! The backend stores most categorical fields as free-form strings (plan
//! `estado`, plan and finding `semaforo`) or numeric ids (`idRol`). Entities keep
//! the raw wire value so nothing is lost on a round trip; these enums are the
//! typed view over those values. Parsing is lenient and returns `None` for
//! unrecognised input, which aggregation skips with a warning.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Numeric role id carried in the backend `idRol` field and the token `sid` claim.
///
/// ```text
/// 1 administrator       ┐
/// 2 supervisor          ├ internal staff
/// 3 auditor             ┘
/// 4 client_responsible  ┐
/// 5 client_viewer       ┘ client-company users
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Supervisor,
    Auditor,
    ClientResponsible,
    ClientViewer,
}

impl Role {
    pub const ALL: [Self; 5] = [
        Self::Administrator,
        Self::Supervisor,
        Self::Auditor,
        Self::ClientResponsible,
        Self::ClientViewer,
    ];

    /// Map a backend role id to a role. Ids outside `1..=5` are unknown.
    #[must_use]
    pub const fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Administrator),
            2 => Some(Self::Supervisor),
            3 => Some(Self::Auditor),
            4 => Some(Self::ClientResponsible),
            5 => Some(Self::ClientViewer),
            _ => None,
        }
    }

    /// Numeric id as stored by the backend.
    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::Administrator => 1,
            Self::Supervisor => 2,
            Self::Auditor => 3,
            Self::ClientResponsible => 4,
            Self::ClientViewer => 5,
        }
    }

    /// Internal staff (administrator, supervisor, auditor).
    #[must_use]
    pub const fn is_internal(self) -> bool {
        matches!(self, Self::Administrator | Self::Supervisor | Self::Auditor)
    }

    /// Users belonging to an audited client company.
    #[must_use]
    pub const fn is_client(self) -> bool {
        !self.is_internal()
    }

    /// Roles whose plan workload shows up on the activities dashboard.
    #[must_use]
    pub const fn carries_plan_workload(self) -> bool {
        matches!(self, Self::Supervisor | Self::Auditor)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Supervisor => "supervisor",
            Self::Auditor => "auditor",
            Self::ClientResponsible => "client_responsible",
            Self::ClientViewer => "client_viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskRating
// ---------------------------------------------------------------------------

/// Traffic-light ("semaforo") risk rating of a finding or audit plan.
///
/// Ordered from most to least severe. The score feeds the probability/impact
/// axes of the plan risk heat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskRating {
    /// Critical non-conformity (black).
    #[serde(rename = "NCA")]
    Nca,
    /// Major non-conformity (red).
    #[serde(rename = "NCM")]
    Ncm,
    /// Minor non-conformity (yellow).
    #[serde(rename = "NCB")]
    Ncb,
    /// Opportunity for improvement (green).
    #[serde(rename = "OM")]
    Om,
    /// Compliant (blue).
    #[serde(rename = "C")]
    C,
}

impl RiskRating {
    pub const ALL: [Self; 5] = [Self::Nca, Self::Ncm, Self::Ncb, Self::Om, Self::C];

    /// The three non-conformity ratings charted on the findings dashboard.
    pub const NON_CONFORMITIES: [Self; 3] = [Self::Nca, Self::Ncm, Self::Ncb];

    /// Lenient parse: surrounding whitespace and letter case are ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|rating| rating.as_str().eq_ignore_ascii_case(raw))
    }

    /// Wire code (`NCA`, `NCM`, `NCB`, `OM`, `C`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nca => "NCA",
            Self::Ncm => "NCM",
            Self::Ncb => "NCB",
            Self::Om => "OM",
            Self::C => "C",
        }
    }

    /// Risk score, 5 for `NCA` down to 1 for `C`.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Nca => 5,
            Self::Ncm => 4,
            Self::Ncb => 3,
            Self::Om => 2,
            Self::C => 1,
        }
    }

    /// Human label used in tables and summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nca => "Black - critical non-conformity",
            Self::Ncm => "Red - major non-conformity",
            Self::Ncb => "Yellow - minor non-conformity",
            Self::Om => "Green - opportunity for improvement",
            Self::C => "Blue - compliant",
        }
    }

    /// Chart colour.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Nca => "#000000",
            Self::Ncm => "#dc3545",
            Self::Ncb => "#ffc107",
            Self::Om => "#28a745",
            Self::C => "#007bff",
        }
    }

    /// `NCA` and `NCM` make a process critical.
    #[must_use]
    pub const fn is_critical(self) -> bool {
        matches!(self, Self::Nca | Self::Ncm)
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PlanStatus
// ---------------------------------------------------------------------------

/// Progress of an audit plan activity.
///
/// ```text
/// Pendiente → En Proceso → Listo
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PlanStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En Proceso")]
    InProgress,
    #[serde(rename = "Listo")]
    Done,
}

impl PlanStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Case-insensitive parse of the wire value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }

    /// Wire value stored in the plan `estado` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En Proceso",
            Self::Done => "Listo",
        }
    }

    /// Chart colour.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Pending => "#dc3545",
            Self::InProgress => "#ffc107",
            Self::Done => "#28a745",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AttachmentKind
// ---------------------------------------------------------------------------

/// The two attachment collections hanging off a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    /// Evidence uploaded by the client responsible (`/archivos`).
    FollowUp,
    /// Supporting documents uploaded by internal staff (`/anexos`).
    Annex,
}

impl AttachmentKind {
    /// Path segment under `/hallazgos/{id}/`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::FollowUp => "archivos",
            Self::Annex => "anexos",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FollowUp => "follow_up",
            Self::Annex => "annex",
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ids_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(6), None);
    }

    #[test]
    fn role_groups() {
        assert!(Role::Administrator.is_internal());
        assert!(Role::Auditor.is_internal());
        assert!(Role::ClientResponsible.is_client());
        assert!(Role::ClientViewer.is_client());
        assert!(!Role::Administrator.carries_plan_workload());
        assert!(Role::Supervisor.carries_plan_workload());
    }

    #[test]
    fn rating_parse_is_lenient() {
        assert_eq!(RiskRating::parse("nca"), Some(RiskRating::Nca));
        assert_eq!(RiskRating::parse(" OM "), Some(RiskRating::Om));
        assert_eq!(RiskRating::parse("c"), Some(RiskRating::C));
        assert_eq!(RiskRating::parse("purple"), None);
        assert_eq!(RiskRating::parse(""), None);
    }

    #[test]
    fn rating_scores_descend_with_severity() {
        let scores: Vec<u8> = RiskRating::ALL.iter().map(|r| r.score()).collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn rating_serializes_as_wire_code() {
        let json = serde_json::to_string(&RiskRating::Ncb).unwrap();
        assert_eq!(json, "\"NCB\"");
    }

    #[test]
    fn plan_status_parse_ignores_case() {
        assert_eq!(PlanStatus::parse("pendiente"), Some(PlanStatus::Pending));
        assert_eq!(PlanStatus::parse("EN PROCESO"), Some(PlanStatus::InProgress));
        assert_eq!(PlanStatus::parse("Listo"), Some(PlanStatus::Done));
        assert_eq!(PlanStatus::parse("Cancelado"), None);
    }

    #[test]
    fn plan_status_serializes_as_spanish_wire_value() {
        let json = serde_json::to_string(&PlanStatus::InProgress).unwrap();
        assert_eq!(json, "\"En Proceso\"");
    }

    #[test]
    fn attachment_kind_segments() {
        assert_eq!(AttachmentKind::FollowUp.path_segment(), "archivos");
        assert_eq!(AttachmentKind::Annex.path_segment(), "anexos");
    }
}
