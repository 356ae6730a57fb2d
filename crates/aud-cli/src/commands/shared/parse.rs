use chrono::NaiveDate;

use aud_core::enums::{PlanStatus, RiskRating};
use aud_core::wire::parse_date;

/// Parse a `YYYY-MM-DD` command-line date.
pub fn parse_day(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    parse_date(raw).ok_or_else(|| anyhow::anyhow!("invalid {field} '{raw}': expected YYYY-MM-DD"))
}

/// [`parse_day`] for an optional flag.
pub fn parse_optional_day(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_day(value, field)).transpose()
}

pub fn parse_status(raw: &str) -> anyhow::Result<PlanStatus> {
    PlanStatus::parse(raw).ok_or_else(|| {
        anyhow::anyhow!("invalid status '{raw}': expected one of Pendiente, En Proceso, Listo")
    })
}

pub fn parse_rating(raw: &str) -> anyhow::Result<RiskRating> {
    RiskRating::parse(raw).ok_or_else(|| {
        anyhow::anyhow!("invalid rating '{raw}': expected one of NCA, NCM, NCB, OM, C")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates() {
        let date = parse_day("2024-03-31", "start").expect("date should parse");
        assert_eq!(date.to_string(), "2024-03-31");
        assert!(parse_optional_day(None, "end").expect("none").is_none());
    }

    #[test]
    fn errors_name_the_field() {
        let err = parse_day("31/03/2024", "commitment date").expect_err("should fail");
        assert!(err.to_string().contains("invalid commitment date '31/03/2024'"));
    }

    #[test]
    fn parses_status_and_rating_case_insensitively() {
        assert_eq!(parse_status("en proceso").expect("status"), PlanStatus::InProgress);
        assert_eq!(parse_rating("nca").expect("rating"), RiskRating::Nca);
        assert!(parse_status("Archivado").is_err());
        assert!(parse_rating("X").is_err());
    }
}
