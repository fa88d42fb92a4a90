// src/common/dates.rs
// O painel envia tanto "2024-05-20" (input de data) quanto ISO 8601 completo.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

pub fn parse_flexible(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Para campos `Option<DateTime<Utc>>` com `#[serde(default, deserialize_with = ...)]`.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_flexible(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("data inválida: {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn accepts_plain_dates_and_rfc3339() {
        let d = parse_flexible("2024-05-20").unwrap();
        assert_eq!((d.year(), d.month(), d.day(), d.hour()), (2024, 5, 20, 0));

        let dt = parse_flexible("2024-05-20T09:30:00+05:00").unwrap();
        assert_eq!(dt.hour(), 4);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_flexible("amanhã").is_none());
    }
}
