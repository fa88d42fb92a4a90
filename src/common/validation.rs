// src/common/validation.rs

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::ValidationError;

use crate::common::error::AppError;

/// Extrai um campo obrigatório já validado pelo `validator`.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or(AppError::MissingField(field))
}

/// Texto obrigatório não pode ser só espaços. Usado em `#[validate(custom(...))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Converte um filtro de query string. Vazio ou "all" significa "sem filtro".
pub fn parse_filter<T: DeserializeOwned>(
    raw: Option<&str>,
    field: &'static str,
) -> Result<Option<T>, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => serde_json::from_value(Value::String(value.to_string()))
            .map(Some)
            .map_err(|_| AppError::InvalidFilter(field)),
    }
}

/// Filtros de texto livre (departamento, categoria, grupo).
pub fn text_filter(raw: Option<&str>) -> Option<String> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(value) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::crm::LeadStatus;

    #[test]
    fn all_and_empty_mean_no_filter() {
        assert_eq!(parse_filter::<LeadStatus>(Some("all"), "status").unwrap(), None);
        assert_eq!(parse_filter::<LeadStatus>(Some(""), "status").unwrap(), None);
        assert_eq!(parse_filter::<LeadStatus>(None, "status").unwrap(), None);
        assert_eq!(text_filter(Some("all")), None);
    }

    #[test]
    fn known_values_are_parsed() {
        assert_eq!(
            parse_filter::<LeadStatus>(Some("proposal"), "status").unwrap(),
            Some(LeadStatus::Proposal)
        );
        assert_eq!(text_filter(Some(" Sales ")), Some("Sales".to_string()));
    }

    #[test]
    fn unknown_values_are_rejected() {
        let err = parse_filter::<LeadStatus>(Some("archived"), "status").unwrap_err();
        assert!(matches!(err, AppError::InvalidFilter("status")));
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(not_blank("Асель").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
    }

    #[test]
    fn require_reports_the_missing_field() {
        assert_eq!(require(Some(3), "amount").unwrap(), 3);
        assert!(matches!(require::<i32>(None, "amount"), Err(AppError::MissingField("amount"))));
    }
}
