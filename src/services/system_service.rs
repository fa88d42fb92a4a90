// src/services/system_service.rs
// Diagnóstico das dependências externas (banco e CDN de mídia)

use sqlx::{Executor, Postgres};

use crate::{
    config::CloudinaryConfig,
    models::system::{ConnectionReport, ServiceCheck},
};

const CLOUDINARY_API: &str = "https://api.cloudinary.com/v1_1";

#[derive(Clone)]
pub struct SystemService {
    http: reqwest::Client,
    cloudinary: Option<CloudinaryConfig>,
}

impl SystemService {
    pub fn new(http: reqwest::Client, cloudinary: Option<CloudinaryConfig>) -> Self {
        Self { http, cloudinary }
    }

    /// As mensagens do relatório são chaves do catálogo; o handler traduz.
    pub async fn connection_report<'e, E>(&self, executor: E) -> ConnectionReport
    where
        E: Executor<'e, Database = Postgres>,
    {
        ConnectionReport {
            database: self.check_database(executor).await,
            cdn: self.check_cdn().await,
        }
    }

    async fn check_database<'e, E>(&self, executor: E) -> ServiceCheck
    where
        E: Executor<'e, Database = Postgres>,
    {
        match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(executor).await {
            Ok(_) => ServiceCheck::connected("db_connected"),
            Err(e) => {
                tracing::warn!("⚠️ Banco de dados indisponível: {}", e);
                ServiceCheck::error("db_error")
            }
        }
    }

    async fn check_cdn(&self) -> ServiceCheck {
        let Some(cloudinary) = &self.cloudinary else {
            return ServiceCheck::not_configured("cdn_not_configured");
        };

        let url = cloudinary_ping_url(&cloudinary.cloud_name);
        let result = self
            .http
            .get(&url)
            .basic_auth(&cloudinary.api_key, Some(&cloudinary.api_secret))
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => ServiceCheck::connected("cdn_connected"),
            Ok(resp) => {
                tracing::warn!("⚠️ Cloudinary respondeu {}", resp.status());
                ServiceCheck::error("cdn_error")
            }
            Err(e) => {
                tracing::warn!("⚠️ Falha ao contatar o Cloudinary: {}", e);
                ServiceCheck::error("cdn_error")
            }
        }
    }
}

pub fn cloudinary_ping_url(cloud_name: &str) -> String {
    format!("{CLOUDINARY_API}/{cloud_name}/ping")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::system::ConnectionStatus;

    #[test]
    fn ping_url_includes_cloud_name() {
        assert_eq!(cloudinary_ping_url("demo"), "https://api.cloudinary.com/v1_1/demo/ping");
    }

    #[tokio::test]
    async fn cdn_without_credentials_is_not_configured() {
        let service = SystemService::new(reqwest::Client::new(), None);
        let check = service.check_cdn().await;

        assert_eq!(check.status, ConnectionStatus::NotConfigured);
        assert_eq!(check.message, "cdn_not_configured");
    }
}
