//! Client-side dashboard aggregation.
//!
//! Each dashboard takes already-fetched collections, groups and counts them,
//! and returns chart series plus a generated summary. Nothing here performs
//! I/O; `aud-cli` owns the fetch fan-out.
//!
//! Rows carrying an unrecognised status or rating are excluded from the
//! per-category tallies and reported in an `unrecognized` counter, so the
//! categories plus `unrecognized` always add up to the filtered row count.

pub mod activities;
pub mod findings;
pub mod plans;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{PlanStatus, RiskRating};

pub use activities::{ActivitiesDashboard, build_activities};
pub use findings::{FindingsDashboard, build_findings};
pub use plans::{PlansDashboard, build_plans};

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// Renderer-agnostic chart configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One data series of a chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// One colour per point, or a single colour for the whole series.
    pub background_color: Vec<String>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>, colors: Vec<String>) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: colors,
        }
    }
}

// ---------------------------------------------------------------------------
// Report options
// ---------------------------------------------------------------------------

/// Presentation inputs shared by the summary generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Date printed in executive summary headers.
    pub today: NaiveDate,
    /// Prefix for monetary amounts.
    pub currency_symbol: String,
}

impl ReportOptions {
    #[must_use]
    pub fn new(today: NaiveDate, currency_symbol: impl Into<String>) -> Self {
        Self {
            today,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Format an amount with thousands separators and two decimals.
    #[must_use]
    pub fn money(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, format_amount(amount))
    }
}

// ---------------------------------------------------------------------------
// Arithmetic helpers
// ---------------------------------------------------------------------------

/// Percentage of `part` in `total`. A zero total yields 0, never NaN.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// [`percent`] rendered with one decimal and a `%` suffix.
#[must_use]
pub fn format_percent(part: u64, total: u64) -> String {
    format!("{:.1}%", percent(part, total))
}

/// `1234567.891` → `1,234,567.89`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn as_point(count: u64) -> f64 {
    count as f64
}

// ---------------------------------------------------------------------------
// Tallies
// ---------------------------------------------------------------------------

/// Plan counts by status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: u64,
    pub in_progress: u64,
    pub done: u64,
    pub unrecognized: u64,
}

impl StatusCounts {
    pub fn add(&mut self, status: Option<PlanStatus>) {
        match status {
            Some(PlanStatus::Pending) => self.pending += 1,
            Some(PlanStatus::InProgress) => self.in_progress += 1,
            Some(PlanStatus::Done) => self.done += 1,
            None => self.unrecognized += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, status: PlanStatus) -> u64 {
        match status {
            PlanStatus::Pending => self.pending,
            PlanStatus::InProgress => self.in_progress,
            PlanStatus::Done => self.done,
        }
    }

    /// Recognised plans only.
    #[must_use]
    pub const fn recognized(&self) -> u64 {
        self.pending + self.in_progress + self.done
    }

    /// Every counted plan, recognised or not.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.recognized() + self.unrecognized
    }
}

/// Row counts by semaforo rating.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RatingCounts {
    pub nca: u64,
    pub ncm: u64,
    pub ncb: u64,
    pub om: u64,
    pub c: u64,
    pub unrecognized: u64,
}

impl RatingCounts {
    pub fn add(&mut self, rating: Option<RiskRating>) {
        match rating {
            Some(RiskRating::Nca) => self.nca += 1,
            Some(RiskRating::Ncm) => self.ncm += 1,
            Some(RiskRating::Ncb) => self.ncb += 1,
            Some(RiskRating::Om) => self.om += 1,
            Some(RiskRating::C) => self.c += 1,
            None => self.unrecognized += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, rating: RiskRating) -> u64 {
        match rating {
            RiskRating::Nca => self.nca,
            RiskRating::Ncm => self.ncm,
            RiskRating::Ncb => self.ncb,
            RiskRating::Om => self.om,
            RiskRating::C => self.c,
        }
    }

    /// `NCA + NCM`.
    #[must_use]
    pub const fn critical(&self) -> u64 {
        self.nca + self.ncm
    }

    /// `OM + C`.
    #[must_use]
    pub const fn favourable(&self) -> u64 {
        self.om + self.c
    }

    #[must_use]
    pub const fn recognized(&self) -> u64 {
        self.nca + self.ncm + self.ncb + self.om + self.c
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.recognized() + self.unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert!(percent(0, 0).abs() < f64::EPSILON);
        assert!(percent(5, 0).abs() < f64::EPSILON);
        assert_eq!(format_percent(0, 0), "0.0%");
    }

    #[test]
    fn percent_formats_one_decimal() {
        assert_eq!(format_percent(1, 3), "33.3%");
        assert_eq!(format_percent(2, 2), "100.0%");
    }

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1_000.0), "1,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-2_500.0), "-2,500.00");
    }

    #[test]
    fn money_prefixes_currency() {
        let options = ReportOptions::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "$");
        assert_eq!(options.money(1500.0), "$1,500.00");
    }

    #[test]
    fn tallies_count_unrecognized_separately() {
        let mut statuses = StatusCounts::default();
        statuses.add(Some(PlanStatus::Pending));
        statuses.add(None);
        assert_eq!(statuses.recognized(), 1);
        assert_eq!(statuses.total(), 2);

        let mut ratings = RatingCounts::default();
        ratings.add(Some(RiskRating::Nca));
        ratings.add(Some(RiskRating::Om));
        ratings.add(None);
        assert_eq!(ratings.critical(), 1);
        assert_eq!(ratings.favourable(), 1);
        assert_eq!(ratings.total(), 3);
    }
}
