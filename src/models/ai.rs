// src/models/ai.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[schema(example = "Как лучше квалифицировать лид?")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

// --- Formato da API generateContent do Gemini ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub system_instruction: Content<'a>,
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Junta os trechos de texto do primeiro candidato. `None` quando vier vazio.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_parts_of_the_first_candidate() {
        let raw = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Привет, " }, { "text": "мир" }] } },
                { "content": { "parts": [{ "text": "ignorado" }] } }
            ]
        });
        let resp: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.text().as_deref(), Some("Привет, мир"));
    }

    #[test]
    fn blocked_or_empty_answers_yield_none() {
        let resp: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
        assert_eq!(resp.text(), None);

        let resp: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] }))
                .unwrap();
        assert_eq!(resp.text(), None);
    }

    #[test]
    fn request_uses_gemini_field_names() {
        let req = GenerateContentRequest {
            system_instruction: Content { role: None, parts: vec![Part { text: "seja breve" }] },
            contents: vec![Content { role: Some("user"), parts: vec![Part { text: "oi" }] }],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "seja breve");
        assert_eq!(value["contents"][0]["role"], "user");
        assert!(value["systemInstruction"].get("role").is_none());
    }
}
