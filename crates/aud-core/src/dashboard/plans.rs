//! Audit plan dashboard: semaforo distribution and the process risk heat map.
//!
//! Each process gets a risk score from the mean semaforo score of its plans
//! (NCA = 5 down to C = 1). The score is used for both heat map axes, so a
//! process always lands on the diagonal; the full 5×5 grid is still produced
//! for the renderer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::activities::UNASSIGNED_PROCESS;
use super::{ChartData, Dataset, RatingCounts, ReportOptions, as_point, format_percent};
use crate::entities::{Audit, AuditPlan, Process};
use crate::enums::RiskRating;

/// Colour band of a heat map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CellBand {
    Green,
    Yellow,
    Red,
}

impl CellBand {
    /// Band for a cell at `probability` (y) and `impact` (x), both `1..=5`.
    #[must_use]
    pub const fn for_cell(probability: u8, impact: u8) -> Self {
        match probability {
            0 | 1 => {
                if impact <= 2 {
                    Self::Green
                } else {
                    Self::Yellow
                }
            }
            2 | 3 => {
                if impact <= 2 {
                    Self::Green
                } else if impact == 3 {
                    Self::Yellow
                } else {
                    Self::Red
                }
            }
            4 => {
                if impact <= 2 {
                    Self::Yellow
                } else {
                    Self::Red
                }
            }
            _ => {
                if impact <= 3 {
                    Self::Yellow
                } else {
                    Self::Red
                }
            }
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Green => "rgba(40, 167, 69, 0.4)",
            Self::Yellow => "rgba(255, 193, 7, 0.4)",
            Self::Red => "rgba(220, 53, 69, 0.4)",
        }
    }
}

/// Risk class of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskClass {
    High,
    Moderate,
    Low,
}

impl RiskClass {
    /// `None` for scores outside every class (e.g. probability 3, impact 2).
    #[must_use]
    pub const fn classify(probability: u8, impact: u8) -> Option<Self> {
        if probability >= 4 && impact >= 4 {
            Some(Self::High)
        } else if (probability == 3 && impact >= 3) || (probability >= 4 && impact <= 3) {
            Some(Self::Moderate)
        } else if probability <= 2 && impact <= 2 {
            Some(Self::Low)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProcessRatings {
    pub process_name: String,
    pub counts: RatingCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProcessRisk {
    pub process_name: String,
    pub probability: u8,
    pub impact: u8,
    /// Plans with a recognised rating that fed the score.
    pub scored_plans: u64,
    pub class: Option<RiskClass>,
}

/// One cell of the 5×5 heat map.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HeatCell {
    pub probability: u8,
    pub impact: u8,
    pub band: CellBand,
    pub processes: Vec<String>,
    pub plan_counts: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PlansDashboard {
    pub selected_audit: Option<String>,
    pub plan_count: u64,
    pub totals: RatingCounts,
    /// Every catalogue process in catalogue order, then the unassigned group if used.
    pub processes: Vec<ProcessRatings>,
    pub risks: Vec<ProcessRisk>,
    /// Rows from probability 5 down to 1, impact 1 to 5 within a row.
    pub heat_map: Vec<HeatCell>,
    pub critical_processes: Vec<String>,
    pub well_performing_processes: Vec<String>,
    pub rating_chart: ChartData,
    pub summary: String,
}

/// Aggregate the plans of one audit.
///
/// `audit_name` selects the audit; `None` selects the first audit in `audits`.
/// A name that matches no audit yields an empty dashboard.
#[must_use]
pub fn build_plans(
    plans: &[AuditPlan],
    processes: &[Process],
    audits: &[Audit],
    audit_name: Option<&str>,
    options: &ReportOptions,
) -> PlansDashboard {
    let selected_audit = audit_name
        .map(str::to_string)
        .or_else(|| audits.first().map(|audit| audit.name.clone()));
    let audit_id = selected_audit
        .as_deref()
        .and_then(|name| audits.iter().find(|audit| audit.name == name))
        .map(|audit| audit.id);

    let selected: Vec<&AuditPlan> = plans
        .iter()
        .filter(|plan| Some(plan.audit_id) == audit_id)
        .collect();

    let mut totals = RatingCounts::default();
    let mut per_process: Vec<ProcessRatings> = processes
        .iter()
        .map(|process| ProcessRatings {
            process_name: process.name.clone(),
            counts: RatingCounts::default(),
        })
        .collect();
    let mut score_sums = vec![0_u64; processes.len()];

    for plan in &selected {
        let rating = plan.rating();
        if rating.is_none() {
            tracing::warn!(plan = plan.id, rating = %plan.rating, "unrecognized plan rating");
        }
        totals.add(rating);

        let index = match processes.iter().position(|p| p.id == plan.process_id) {
            Some(index) => index,
            None => unassigned_index(processes.len(), &mut per_process, &mut score_sums),
        };
        per_process[index].counts.add(rating);
        if let Some(rating) = rating {
            score_sums[index] += u64::from(rating.score());
        }
    }

    let risks: Vec<ProcessRisk> = per_process
        .iter()
        .zip(&score_sums)
        .map(|(process, sum)| {
            let scored = process.counts.recognized();
            let score = mean_score(*sum, scored);
            ProcessRisk {
                process_name: process.process_name.clone(),
                probability: score,
                impact: score,
                scored_plans: scored,
                class: RiskClass::classify(score, score),
            }
        })
        .collect();

    let heat_map = heat_map(&risks);

    let critical_processes: Vec<String> = per_process
        .iter()
        .filter(|p| p.counts.critical() > 0)
        .map(|p| p.process_name.clone())
        .collect();
    let well_performing_processes: Vec<String> = per_process
        .iter()
        .filter(|p| p.counts.favourable() > 0 && p.counts.critical() == 0)
        .map(|p| p.process_name.clone())
        .collect();

    let summary = executive_summary(
        selected_audit.as_deref(),
        &totals,
        &risks,
        &critical_processes,
        &well_performing_processes,
        options,
    );

    PlansDashboard {
        selected_audit,
        plan_count: selected.len() as u64,
        rating_chart: rating_chart(&per_process),
        totals,
        processes: per_process,
        risks,
        heat_map,
        critical_processes,
        well_performing_processes,
        summary,
    }
}

/// Slot of the unassigned-process group, appended after the catalogue on first use.
fn unassigned_index(
    catalogue_len: usize,
    per_process: &mut Vec<ProcessRatings>,
    score_sums: &mut Vec<u64>,
) -> usize {
    if per_process.len() > catalogue_len {
        return catalogue_len;
    }
    per_process.push(ProcessRatings {
        process_name: UNASSIGNED_PROCESS.to_string(),
        counts: RatingCounts::default(),
    });
    score_sums.push(0);
    per_process.len() - 1
}

/// Mean score rounded half up. A process without scored plans scores 1.
fn mean_score(sum: u64, count: u64) -> u8 {
    if count == 0 {
        return 1;
    }
    let rounded = (sum * 2 + count) / (count * 2);
    u8::try_from(rounded.clamp(1, 5)).unwrap_or(5)
}

fn heat_map(risks: &[ProcessRisk]) -> Vec<HeatCell> {
    let mut cells = Vec::with_capacity(25);
    for probability in (1..=5).rev() {
        for impact in 1..=5 {
            let here: Vec<&ProcessRisk> = risks
                .iter()
                .filter(|r| r.probability == probability && r.impact == impact)
                .collect();
            cells.push(HeatCell {
                probability,
                impact,
                band: CellBand::for_cell(probability, impact),
                processes: here.iter().map(|r| r.process_name.clone()).collect(),
                plan_counts: here.iter().map(|r| r.scored_plans).collect(),
            });
        }
    }
    cells
}

fn rating_chart(processes: &[ProcessRatings]) -> ChartData {
    ChartData {
        labels: processes.iter().map(|p| p.process_name.clone()).collect(),
        datasets: RiskRating::ALL
            .iter()
            .map(|rating| {
                Dataset::new(
                    rating.as_str(),
                    processes
                        .iter()
                        .map(|p| as_point(p.counts.get(*rating)))
                        .collect(),
                    vec![rating.color().to_string()],
                )
            })
            .collect(),
    }
}

fn names_in(risks: &[ProcessRisk], class: RiskClass) -> Vec<&str> {
    risks
        .iter()
        .filter(|r| r.class == Some(class))
        .map(|r| r.process_name.as_str())
        .collect()
}

fn executive_summary(
    audit: Option<&str>,
    totals: &RatingCounts,
    risks: &[ProcessRisk],
    critical: &[String],
    well_performing: &[String],
    options: &ReportOptions,
) -> String {
    let total = totals.recognized();
    let mut text = format!("**Executive summary - {}**\n\n", options.today.format("%Y-%m-%d"));
    let _ = writeln!(text, "- Selected audit: {}.", audit.unwrap_or("none"));
    let _ = writeln!(text, "- Audit plans rated: {total}.");

    let _ = writeln!(text, "\n### Rating distribution");
    for rating in RiskRating::ALL {
        let count = totals.get(rating);
        let _ = writeln!(
            text,
            "  - {} ({}): {count} ({})",
            rating.as_str(),
            rating.label(),
            format_percent(count, total)
        );
    }
    if totals.unrecognized > 0 {
        let _ = writeln!(
            text,
            "  - Unrecognized ratings skipped: {}",
            totals.unrecognized
        );
    }

    if critical.is_empty() {
        let _ = writeln!(text, "- No critical processes (no NCA or NCM).");
    } else {
        let _ = writeln!(
            text,
            "- Critical processes (NCA or NCM): {}. Prioritise immediate corrective action.",
            critical.join(", ")
        );
    }
    if well_performing.is_empty() {
        let _ = writeln!(text, "- No well-performing processes (OM or C without NCA/NCM).");
    } else {
        let _ = writeln!(
            text,
            "- Well-performing processes (OM and C): {}. These can serve as a reference for the rest.",
            well_performing.join(", ")
        );
    }

    let _ = writeln!(text, "\n### Risk matrix");
    let _ = writeln!(text, "- Processes analysed: {}.", risks.len());
    let sections = [
        (
            RiskClass::High,
            "High risk (probability and impact >= 4)",
            "Immediate mitigation required.",
        ),
        (
            RiskClass::Moderate,
            "Moderate risk (probability or impact >= 3)",
            "Monitor and prepare preventive action plans.",
        ),
        (
            RiskClass::Low,
            "Low risk (probability and impact <= 2)",
            "These processes are under control.",
        ),
    ];
    for (class, heading, advice) in sections {
        let names = names_in(risks, class);
        if names.is_empty() {
            let _ = writeln!(text, "- {heading}: none.");
        } else {
            let _ = writeln!(text, "- **{heading}:** {}. {advice}", names.join(", "));
        }
    }

    let _ = writeln!(text, "\n### Recommendations");
    let _ = writeln!(
        text,
        "- Reduce the share of NCA and NCM through detailed reviews and targeted action plans."
    );
    let _ = writeln!(
        text,
        "- Audit high and moderate risk processes more often and tighten their controls."
    );
    text
}
