// src/services/ai_service.rs
// Repasse simples para a API generateContent do Gemini: uma pergunta, uma resposta.

use crate::{
    common::error::AppError,
    config::GeminiConfig,
    models::ai::{Content, GenerateContentRequest, GenerateContentResponse, Part},
};

const SYSTEM_INSTRUCTION: &str = "You are the assistant of a small business CRM. \
Answer briefly, professionally and to the point. \
Reply in the language the user writes in. \
Help with sales, leads, clients, finance and team questions.";

#[derive(Clone)]
pub struct AiService {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl AiService {
    pub fn new(http: reqwest::Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.config.api_url, self.config.model)
    }

    /// `Ok(None)` quando o modelo não devolve texto (ex.: resposta bloqueada).
    pub async fn chat(&self, message: Option<&str>) -> Result<Option<String>, AppError> {
        // A chave é conferida antes da mensagem: sem chave é sempre 503
        let api_key = self.config.api_key.as_deref().ok_or(AppError::AiUnavailable)?;

        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or(AppError::BadRequest("ai_message_required"))?;

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: SYSTEM_INSTRUCTION }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: message }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AiGenerationFailed(format!("Gemini respondeu {status}: {body}")));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(api_key: Option<&str>) -> AiService {
        AiService::new(
            reqwest::Client::new(),
            GeminiConfig {
                api_key: api_key.map(str::to_string),
                model: "gemini-2.0-flash".into(),
                api_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            },
        )
    }

    #[test]
    fn endpoint_targets_the_configured_model() {
        assert_eq!(
            service(None).endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_wins_over_missing_message() {
        let err = service(None).chat(None).await.unwrap_err();
        assert!(matches!(err, AppError::AiUnavailable));
    }

    #[tokio::test]
    async fn blank_message_is_rejected_before_any_request() {
        let err = service(Some("key")).chat(Some("   ")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest("ai_message_required")));
    }
}
