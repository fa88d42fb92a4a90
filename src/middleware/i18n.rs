// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};

use crate::common::i18n::DEFAULT_LANGUAGE;

// Idioma preferido do cliente (subtag primária do Accept-Language)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Locale {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let lang = headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                accept_language::parse(header_str)
                    .first()
                    // "ru-KZ" -> "ru"
                    .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
            })
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Locale(lang)
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Locale::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn locale_for(value: Option<&'static str>) -> Locale {
        let mut headers = HeaderMap::new();
        if let Some(v) = value {
            headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(v));
        }
        Locale::from_headers(&headers)
    }

    #[test]
    fn picks_the_primary_subtag_of_the_preferred_language() {
        assert_eq!(locale_for(Some("ru-KZ,ru;q=0.9,en;q=0.8")).0, "ru");
        assert_eq!(locale_for(Some("en;q=0.5, kk;q=0.9")).0, "kk");
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(locale_for(None).0, "en");
    }
}
