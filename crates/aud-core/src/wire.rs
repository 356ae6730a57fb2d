//! Serde helpers for backend wire formats.
//!
//! The backend emits dates as full ISO timestamps (`2024-03-01T00:00:00`) or as
//! plain `YYYY-MM-DD` strings depending on the endpoint. Only the leading date
//! portion is meaningful; it is always written back as `YYYY-MM-DD`.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the `YYYY-MM-DD` prefix of a backend date string.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Format a date the way the backend expects it on writes.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Optional date field. `null`, missing and blank strings all read as `None`.
///
/// Use with `#[serde(default, with = "crate::wire::opt_date")]`.
pub mod opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.serialize_str(&super::format_date(*date)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::parse_date(value)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {value}"))),
        }
    }
}

/// `skip_serializing_if` predicate for auto-assigned ids.
///
/// Creates send no id and let the backend assign one; updates carry the id.
#[must_use]
#[allow(clippy::trivially_copy_pass_by_ref)]
pub const fn is_unassigned(id: &i64) -> bool {
    *id == 0
}

/// Serde default for `estatus` flags, which are active unless stated otherwise.
#[must_use]
pub const fn active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Dated {
        #[serde(default, with = "opt_date")]
        when: Option<NaiveDate>,
    }

    #[test]
    fn parses_timestamp_prefix() {
        let date = parse_date("2024-03-01T13:45:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn parses_plain_date() {
        assert_eq!(
            parse_date("2023-12-31"),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }

    #[test]
    fn rejects_short_and_garbage_input() {
        assert_eq!(parse_date("2024-3-1"), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn optional_date_accepts_null_blank_and_missing() {
        let parsed: Dated = serde_json::from_str(r#"{"when":null}"#).unwrap();
        assert_eq!(parsed.when, None);
        let parsed: Dated = serde_json::from_str(r#"{"when":"  "}"#).unwrap();
        assert_eq!(parsed.when, None);
        let parsed: Dated = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.when, None);
    }

    #[test]
    fn optional_date_writes_plain_date() {
        let value = Dated {
            when: NaiveDate::from_ymd_opt(2024, 7, 9),
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"when":"2024-07-09"}"#);
    }

    #[test]
    fn optional_date_rejects_garbage() {
        let result: Result<Dated, _> = serde_json::from_str(r#"{"when":"tomorrow"}"#);
        assert!(result.is_err());
    }
}
