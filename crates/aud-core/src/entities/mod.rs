//! Entity structs for every resource exposed by the audit backend.
//!
//! Field names follow Rust conventions; the backend's mixed-case JSON names are
//! kept on the wire through `#[serde(rename)]`. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON round trips and fixture validation.

mod activity;
mod attachment;
mod audit;
mod audit_plan;
mod company;
mod finding;
mod process;
mod role;
mod user;

pub use activity::Activity;
pub use attachment::Attachment;
pub use audit::Audit;
pub use audit_plan::AuditPlan;
pub use company::Company;
pub use finding::{Finding, FindingView};
pub use process::Process;
pub use role::RoleRecord;
pub use user::User;

/// Label shown when a referenced id cannot be resolved in a lookup table.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Resolve `id` to a display name in a fetched lookup collection.
///
/// Falls back to [`UNKNOWN_LABEL`] when no row matches.
pub fn resolve_name<'a, T>(
    rows: &'a [T],
    id: i64,
    key: impl Fn(&T) -> i64,
    name: impl Fn(&'a T) -> &'a str,
) -> &'a str {
    rows.iter()
        .find(|&row| key(row) == id)
        .map_or(UNKNOWN_LABEL, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_name_falls_back_to_unknown() {
        let processes = vec![
            Process {
                id: 1,
                name: "Compras".into(),
            },
            Process {
                id: 2,
                name: "Ventas".into(),
            },
        ];
        assert_eq!(
            resolve_name(&processes, 2, |p| p.id, |p| p.name.as_str()),
            "Ventas"
        );
        assert_eq!(
            resolve_name(&processes, 9, |p| p.id, |p| p.name.as_str()),
            UNKNOWN_LABEL
        );
    }
}
