//! Findings dashboard: impact and compliance across finding views.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::{ChartData, Dataset, RatingCounts, ReportOptions, as_point};
use crate::entities::FindingView;
use crate::enums::RiskRating;

/// Figures for one non-conformity rating.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RatingFigure {
    pub rating: RiskRating,
    pub count: u64,
    pub impact: f64,
    pub pending: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditImpact {
    pub audit_name: String,
    pub impact: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FindingsDashboard {
    /// Distinct audit names in first-seen order.
    pub audit_names: Vec<String>,
    pub selected_audit: Option<String>,
    pub finding_count: u64,
    pub total_impact: f64,
    pub compliant: u64,
    pub pending: u64,
    /// All five ratings plus unrecognised values.
    pub ratings: RatingCounts,
    /// NCA, NCM and NCB breakdown.
    pub non_conformities: Vec<RatingFigure>,
    pub impact_by_audit: Vec<AuditImpact>,
    pub rating_chart: ChartData,
    pub compliance_chart: ChartData,
    pub impact_chart: ChartData,
    pub audit_impact_chart: ChartData,
    pub summary: String,
}

/// Aggregate finding views for one audit.
///
/// `audit_name` selects the audit; when `None` the first distinct audit name in
/// `rows` is selected. With no rows at all nothing is selected and every figure
/// is zero.
#[must_use]
pub fn build_findings(
    rows: &[FindingView],
    audit_name: Option<&str>,
    options: &ReportOptions,
) -> FindingsDashboard {
    let mut audit_names: Vec<String> = Vec::new();
    for row in rows {
        if !audit_names.contains(&row.audit_name) {
            audit_names.push(row.audit_name.clone());
        }
    }

    let selected_audit = audit_name
        .map(str::to_string)
        .or_else(|| audit_names.first().cloned());

    let filtered: Vec<&FindingView> = rows
        .iter()
        .filter(|row| {
            selected_audit
                .as_deref()
                .is_none_or(|name| row.audit_name == name)
        })
        .collect();

    let total_impact: f64 = filtered.iter().map(|row| row.impact_amount).sum();
    let compliant = filtered.iter().filter(|row| row.compliant).count() as u64;
    let pending = filtered.len() as u64 - compliant;

    let mut ratings = RatingCounts::default();
    for row in &filtered {
        let rating = row.rating();
        if rating.is_none() {
            tracing::warn!(finding = row.id, rating = %row.rating, "unrecognized finding rating");
        }
        ratings.add(rating);
    }

    let non_conformities: Vec<RatingFigure> = RiskRating::NON_CONFORMITIES
        .into_iter()
        .map(|rating| {
            let matching = filtered.iter().filter(|row| row.rating() == Some(rating));
            RatingFigure {
                rating,
                count: ratings.get(rating),
                impact: matching.clone().map(|row| row.impact_amount).sum(),
                pending: matching.filter(|row| !row.compliant).count() as u64,
            }
        })
        .collect();

    let impact_by_audit: Vec<AuditImpact> = audit_names
        .iter()
        .filter(|name| selected_audit.as_deref().is_none_or(|sel| sel == name.as_str()))
        .map(|name| AuditImpact {
            audit_name: name.clone(),
            impact: rows
                .iter()
                .filter(|row| &row.audit_name == name)
                .map(|row| row.impact_amount)
                .sum(),
        })
        .collect();

    let finding_count = filtered.len() as u64;
    let summary = executive_summary(
        finding_count,
        total_impact,
        pending,
        compliant,
        &non_conformities,
        options,
    );

    FindingsDashboard {
        rating_chart: rating_chart(&non_conformities),
        compliance_chart: compliance_chart(compliant, pending),
        impact_chart: impact_chart(&non_conformities, options),
        audit_impact_chart: audit_impact_chart(&impact_by_audit, options),
        audit_names,
        selected_audit,
        finding_count,
        total_impact,
        compliant,
        pending,
        ratings,
        non_conformities,
        impact_by_audit,
        summary,
    }
}

fn executive_summary(
    finding_count: u64,
    total_impact: f64,
    pending: u64,
    compliant: u64,
    non_conformities: &[RatingFigure],
    options: &ReportOptions,
) -> String {
    let pending_critical: u64 = non_conformities
        .iter()
        .filter(|figure| figure.rating.is_critical())
        .map(|figure| figure.pending)
        .sum();

    let mut text = format!("**Executive summary - {}**\n\n", options.today.format("%Y-%m-%d"));
    let _ = writeln!(text, "- Findings recorded: {finding_count}.");
    let _ = writeln!(text, "- Total impact: {}.", options.money(total_impact));
    let _ = writeln!(
        text,
        "- Pending findings: {pending}, of which {pending_critical} are critical (NCA/NCM). \
         These need attention first to mitigate risk."
    );
    let _ = writeln!(
        text,
        "- Compliant findings: {compliant}. Keep the focus on closing the pending ones."
    );
    text
}

fn rating_colors(figures: &[RatingFigure]) -> Vec<String> {
    figures.iter().map(|f| f.rating.color().to_string()).collect()
}

fn rating_labels(figures: &[RatingFigure]) -> Vec<String> {
    figures.iter().map(|f| f.rating.as_str().to_string()).collect()
}

fn rating_chart(figures: &[RatingFigure]) -> ChartData {
    ChartData {
        labels: rating_labels(figures),
        datasets: vec![Dataset::new(
            "Findings by rating",
            figures.iter().map(|f| as_point(f.count)).collect(),
            rating_colors(figures),
        )],
    }
}

fn compliance_chart(compliant: u64, pending: u64) -> ChartData {
    ChartData {
        labels: vec!["Compliant".to_string(), "Pending".to_string()],
        datasets: vec![Dataset::new(
            "Finding status",
            vec![as_point(compliant), as_point(pending)],
            vec!["#28a745".to_string(), "#dc3545".to_string()],
        )],
    }
}

fn impact_chart(figures: &[RatingFigure], options: &ReportOptions) -> ChartData {
    ChartData {
        labels: rating_labels(figures),
        datasets: vec![Dataset::new(
            format!("Impact ({})", options.currency_symbol),
            figures.iter().map(|f| f.impact).collect(),
            rating_colors(figures),
        )],
    }
}

fn audit_impact_chart(audits: &[AuditImpact], options: &ReportOptions) -> ChartData {
    ChartData {
        labels: audits.iter().map(|a| a.audit_name.clone()).collect(),
        datasets: vec![Dataset::new(
            format!("Impact by audit ({})", options.currency_symbol),
            audits.iter().map(|a| a.impact).collect(),
            vec!["#007bff".to_string()],
        )],
    }
}
