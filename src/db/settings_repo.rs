use sqlx::{types::Json, Executor, Postgres};

use crate::{
    common::{error::AppError, i18n::DEFAULT_LANGUAGE},
    models::settings::{Appearance, Notifications, Profile, Settings, UpdateSettingsRequest},
};

const SETTINGS_COLUMNS: &str =
    "user_id, profile, notifications, appearance, language, created_at, updated_at";

// Sem estado: cada consulta recebe o executor (pool, conexão ou transação)
#[derive(Clone, Default)]
pub struct SettingsRepository;

impl SettingsRepository {
    pub fn new() -> Self {
        Self
    }

    /// Busca as configurações; na primeira leitura grava os padrões.
    pub async fn get_or_create<'e, E>(&self, executor: E, user_id: &str) -> Result<Settings, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // O DO UPDATE "vazio" garante que o RETURNING devolva a linha existente
        let sql = format!(
            r#"
            INSERT INTO settings (user_id, profile, notifications, appearance, language)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING {SETTINGS_COLUMNS}
            "#
        );

        let settings = sqlx::query_as::<_, Settings>(&sql)
            .bind(user_id)
            .bind(Json(Profile::default()))
            .bind(Json(Notifications::default()))
            .bind(Json(Appearance::default()))
            .bind(DEFAULT_LANGUAGE)
            .fetch_one(executor)
            .await?;

        Ok(settings)
    }

    /// UPSERT: seções ausentes mantêm o valor salvo (ou o padrão, se ainda não houver registro).
    pub async fn upsert<'e, E>(
        &self,
        executor: E,
        user_id: &str,
        input: UpdateSettingsRequest,
    ) -> Result<Settings, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO settings (user_id, profile, notifications, appearance, language)
            VALUES ($1, COALESCE($2, $6), COALESCE($3, $7), COALESCE($4, $8), COALESCE($5, $9))
            ON CONFLICT (user_id) DO UPDATE SET
                profile = COALESCE($2, settings.profile),
                notifications = COALESCE($3, settings.notifications),
                appearance = COALESCE($4, settings.appearance),
                language = COALESCE($5, settings.language),
                updated_at = NOW()
            RETURNING {SETTINGS_COLUMNS}
            "#
        );

        let settings = sqlx::query_as::<_, Settings>(&sql)
            .bind(user_id)
            .bind(input.profile.map(Json))
            .bind(input.notifications.map(Json))
            .bind(input.appearance.map(Json))
            .bind(input.language)
            .bind(Json(Profile::default()))
            .bind(Json(Notifications::default()))
            .bind(Json(Appearance::default()))
            .bind(DEFAULT_LANGUAGE)
            .fetch_one(executor)
            .await?;

        Ok(settings)
    }
}
