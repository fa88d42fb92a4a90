// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{
        AgendaRepository, CrmRepository, FinanceRepository, HrRepository, InventoryRepository,
        SettingsRepository, UserRepository,
    },
    services::{
        agenda_service::AgendaService, ai_service::AiService, auth::AuthService,
        crm_service::CrmService, finance_service::FinanceService, hr_service::HrService,
        inventory_service::InventoryService, seed_service::SeedService,
        settings_service::SettingsService, system_service::SystemService,
    },
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Sem chave o chat responde 503.
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub session_secret: String,
    /// Cookie `Secure` só em produção
    pub production: bool,
    pub bind_addr: String,
    pub gemini: GeminiConfig,
    pub cloudinary: Option<CloudinaryConfig>,
    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de qualquer fonte de variáveis. Valores vazios contam como ausentes.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let session_secret = get("SESSION_SECRET").context("SESSION_SECRET deve ser definido")?;

        let cloudinary = match (
            get("CLOUDINARY_CLOUD_NAME"),
            get("CLOUDINARY_API_KEY"),
            get("CLOUDINARY_API_SECRET"),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryConfig {
                cloud_name,
                api_key,
                api_secret,
            }),
            _ => None,
        };

        let admin = match (get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email,
                password,
                name: get("ADMIN_NAME").unwrap_or_else(|| "Admin".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            session_secret,
            production: get("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("production")),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            gemini: GeminiConfig {
                api_key: get("GEMINI_API_KEY"),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                api_url: get("GEMINI_API_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
            cloudinary,
            admin,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Arc<Config>,
    pub i18n_store: Arc<I18nStore>,
    pub auth_service: AuthService,
    pub crm_service: CrmService,
    pub hr_service: HrService,
    pub agenda_service: AgendaService,
    pub finance_service: FinanceService,
    pub inventory_service: InventoryService,
    pub settings_service: SettingsService,
    pub ai_service: AiService,
    pub system_service: SystemService,
    pub seed_service: SeedService,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Self::with_pool(config, db_pool)
    }

    /// Monta o gráfico de dependências sobre um pool já criado.
    pub fn with_pool(config: Config, db_pool: PgPool) -> anyhow::Result<Self> {
        let i18n_store = Arc::new(I18nStore::load()?);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Falha ao criar o cliente HTTP")?;

        let user_repo = UserRepository::new(db_pool.clone());
        let crm_repo = CrmRepository::new();
        let hr_repo = HrRepository::new();
        let agenda_repo = AgendaRepository::new();
        let finance_repo = FinanceRepository::new();
        let inventory_repo = InventoryRepository::new();
        let settings_repo = SettingsRepository::new();

        let auth_service = AuthService::new(user_repo, config.session_secret.clone());
        let seed_service = SeedService::new(
            crm_repo.clone(),
            hr_repo.clone(),
            agenda_repo.clone(),
            finance_repo.clone(),
            inventory_repo.clone(),
        );

        Ok(Self {
            db_pool,
            auth_service,
            crm_service: CrmService::new(crm_repo),
            hr_service: HrService::new(hr_repo),
            agenda_service: AgendaService::new(agenda_repo),
            finance_service: FinanceService::new(finance_repo),
            inventory_service: InventoryService::new(inventory_repo),
            settings_service: SettingsService::new(settings_repo),
            ai_service: AiService::new(http.clone(), config.gemini.clone()),
            system_service: SystemService::new(http, config.cloudinary.clone()),
            seed_service,
            i18n_store,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn minimal_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("SESSION_SECRET", "s3cr3t"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert!(config.gemini.api_key.is_none());
        assert!(config.cloudinary.is_none());
        assert!(config.admin.is_none());
        assert!(!config.production);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/crm")]));
        assert!(result.is_err());
    }

    #[test]
    fn cloudinary_needs_all_three_credentials() {
        let partial = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("SESSION_SECRET", "s"),
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_API_KEY", "123"),
        ]))
        .unwrap();
        assert!(partial.cloudinary.is_none());

        let full = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/crm"),
            ("SESSION_SECRET", "s"),
            ("APP_ENV", "production"),
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_API_KEY", "123"),
            ("CLOUDINARY_API_SECRET", "abc"),
            ("ADMIN_EMAIL", "admin@test.com"),
            ("ADMIN_PASSWORD", "admin123"),
        ]))
        .unwrap();
        assert_eq!(full.cloudinary.unwrap().cloud_name, "demo");
        assert_eq!(full.admin.unwrap().name, "Admin");
        assert!(full.production);
    }
}
