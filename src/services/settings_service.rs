// src/services/settings_service.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::{error::AppError, i18n::I18nStore},
    db::SettingsRepository,
    models::settings::{Settings, UpdateSettingsRequest, DEFAULT_SETTINGS_USER},
};

#[derive(Clone)]
pub struct SettingsService {
    repo: SettingsRepository,
}

impl SettingsService {
    pub fn new(repo: SettingsRepository) -> Self {
        Self { repo }
    }

    pub async fn get_settings<'e, E>(&self, executor: E) -> Result<Settings, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.get_or_create(executor, DEFAULT_SETTINGS_USER).await
    }

    pub async fn update_settings<'e, E>(
        &self,
        executor: E,
        mut input: UpdateSettingsRequest,
        i18n: &I18nStore,
    ) -> Result<Settings, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        if let Some(language) = input.language.take() {
            input.language = Some(normalize_language(&language, i18n)?);
        }

        self.repo.upsert(executor, DEFAULT_SETTINGS_USER, input).await
    }
}

/// Aceita "RU", " kk " etc., desde que exista catálogo para o idioma.
pub fn normalize_language(raw: &str, i18n: &I18nStore) -> Result<String, AppError> {
    let language = raw.trim().to_lowercase();
    if i18n.is_supported(&language) {
        Ok(language)
    } else {
        Err(AppError::BadRequest("invalid_language"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_languages_are_normalized() {
        let store = I18nStore::load().unwrap();

        assert_eq!(normalize_language(" RU ", &store).unwrap(), "ru");
        assert_eq!(normalize_language("kk", &store).unwrap(), "kk");
    }

    #[test]
    fn unknown_language_is_rejected() {
        let store = I18nStore::load().unwrap();
        let err = normalize_language("pt", &store).unwrap_err();

        assert!(matches!(err, AppError::BadRequest("invalid_language")));
    }
}
