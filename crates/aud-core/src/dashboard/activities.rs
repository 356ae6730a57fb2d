//! Activities dashboard: plan workload per auditor and per process.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ChartData, Dataset, StatusCounts, as_point};
use crate::entities::{Audit, AuditPlan, Process, User};
use crate::enums::PlanStatus;

/// Group label for plans whose process id is not in the process catalogue.
pub const UNASSIGNED_PROCESS: &str = "Unassigned process";

const ALL_AUDITS: &str = "all audits";

/// Status breakdown for one auditor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditorLoad {
    pub user_id: i64,
    pub name: String,
    pub counts: StatusCounts,
}

/// Status breakdown for one process.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProcessLoad {
    pub process_name: String,
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ActivitiesDashboard {
    /// Name of the filtered audit, `None` when every audit is included.
    pub audit_name: Option<String>,
    /// Plans assigned to supervisors and auditors after the audit filter.
    pub plan_count: u64,
    pub totals: StatusCounts,
    /// Every supervisor and auditor, most pending plans first.
    pub auditors: Vec<AuditorLoad>,
    /// Every known process in catalogue order, then the unassigned group if used.
    pub processes: Vec<ProcessLoad>,
    pub status_chart: ChartData,
    pub auditor_chart: ChartData,
    pub process_chart: ChartData,
    pub notice: String,
}

/// Aggregate plan workload.
///
/// Only users whose role carries plan workload (supervisor, auditor) are
/// considered, together with the plans assigned to them. `audit_id` narrows the
/// plans to one audit.
#[must_use]
pub fn build_activities(
    plans: &[AuditPlan],
    users: &[User],
    audits: &[Audit],
    processes: &[Process],
    audit_id: Option<i64>,
) -> ActivitiesDashboard {
    let staff: Vec<&User> = users
        .iter()
        .filter(|user| user.role().is_some_and(|role| role.carries_plan_workload()))
        .collect();

    let selected: Vec<&AuditPlan> = plans
        .iter()
        .filter(|plan| staff.iter().any(|user| user.id == plan.auditor_id))
        .filter(|plan| audit_id.is_none_or(|id| plan.audit_id == id))
        .collect();

    let mut totals = StatusCounts::default();
    for plan in &selected {
        let status = plan.status();
        if status.is_none() {
            tracing::warn!(plan = plan.id, status = %plan.status, "unrecognized plan status");
        }
        totals.add(status);
    }

    let mut auditors: Vec<AuditorLoad> = staff
        .iter()
        .map(|user| {
            let mut counts = StatusCounts::default();
            for plan in selected.iter().filter(|plan| plan.auditor_id == user.id) {
                counts.add(plan.status());
            }
            AuditorLoad {
                user_id: user.id,
                name: user.name.clone(),
                counts,
            }
        })
        .collect();
    auditors.sort_by(|a, b| b.counts.pending.cmp(&a.counts.pending));

    let processes = process_loads(&selected, processes);

    let audit_name = audit_id.map(|id| {
        audits
            .iter()
            .find(|audit| audit.id == id)
            .map_or_else(|| format!("audit {id}"), |audit| audit.name.clone())
    });
    let scope = audit_name.as_deref().unwrap_or(ALL_AUDITS);
    let notice = if totals.pending > 0 {
        format!(
            "There are {} pending activities in {scope}",
            totals.pending
        )
    } else {
        format!("You have no pending activities in {scope}")
    };

    ActivitiesDashboard {
        audit_name,
        plan_count: selected.len() as u64,
        status_chart: status_chart(&totals),
        auditor_chart: auditor_chart(&auditors),
        process_chart: process_chart(&processes),
        totals,
        auditors,
        processes,
        notice,
    }
}

fn process_loads(plans: &[&AuditPlan], catalogue: &[Process]) -> Vec<ProcessLoad> {
    let mut loads: Vec<ProcessLoad> = catalogue
        .iter()
        .map(|process| ProcessLoad {
            process_name: process.name.clone(),
            counts: StatusCounts::default(),
        })
        .collect();

    for plan in plans {
        let name = catalogue
            .iter()
            .find(|process| process.id == plan.process_id)
            .map_or(UNASSIGNED_PROCESS, |process| process.name.as_str());
        let index = match loads.iter().position(|load| load.process_name == name) {
            Some(index) => index,
            None => {
                loads.push(ProcessLoad {
                    process_name: name.to_string(),
                    counts: StatusCounts::default(),
                });
                loads.len() - 1
            }
        };
        loads[index].counts.add(plan.status());
    }

    loads
}

fn status_chart(totals: &StatusCounts) -> ChartData {
    ChartData {
        labels: PlanStatus::ALL.iter().map(|s| s.as_str().to_string()).collect(),
        datasets: vec![Dataset::new(
            "Plans",
            PlanStatus::ALL.iter().map(|s| as_point(totals.get(*s))).collect(),
            PlanStatus::ALL.iter().map(|s| s.color().to_string()).collect(),
        )],
    }
}

fn auditor_chart(auditors: &[AuditorLoad]) -> ChartData {
    let busy: Vec<&AuditorLoad> = auditors
        .iter()
        .filter(|auditor| auditor.counts.total() > 0)
        .collect();
    ChartData {
        labels: busy.iter().map(|a| a.name.clone()).collect(),
        datasets: PlanStatus::ALL
            .iter()
            .map(|status| {
                Dataset::new(
                    status.as_str(),
                    busy.iter().map(|a| as_point(a.counts.get(*status))).collect(),
                    vec![status.color().to_string()],
                )
            })
            .collect(),
    }
}

fn process_chart(processes: &[ProcessLoad]) -> ChartData {
    ChartData {
        labels: processes.iter().map(|p| p.process_name.clone()).collect(),
        datasets: PlanStatus::ALL
            .iter()
            .map(|status| {
                Dataset::new(
                    status.as_str(),
                    processes
                        .iter()
                        .map(|p| as_point(p.counts.get(*status)))
                        .collect(),
                    vec![status.color().to_string()],
                )
            })
            .collect(),
    }
}
