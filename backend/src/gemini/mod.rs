//! # Gemini Client
//!
//! Minimal client for the Gemini `generateContent` endpoint. One user
//! turn in, generated text out; resilience concerns are left to the
//! provider.

pub mod types;

use crate::provider::{Attachment, ProviderError, TextGenerator};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use tracing::{debug, error};
use types::*;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url: GEMINI_BASE_URL.to_string(),
            api_key,
            model,
        }
    }

    /// Override the API endpoint, e.g. to point at a local stub.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

/// Build the single-turn request body: the question text plus, when a
/// file is attached, its base64-encoded bytes as inline data.
fn build_request(question: &str, attachment: Option<&Attachment>) -> GenerateContentRequest {
    let mut parts = vec![Part::text(question)];

    if let Some(attachment) = attachment {
        parts.push(Part::inline_data(
            attachment.mime_type.clone(),
            BASE64.encode(&attachment.data),
        ));
    }

    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts,
        }],
    }
}

/// Pull the generated text out of the response. A response with no
/// candidates, no parts, or only whitespace text counts as empty.
fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    Ok(text)
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        question: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = build_request(question, attachment);

        debug!(model = %self.model, has_attachment = attachment.is_some(), "Calling Gemini generateContent");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            error!("Gemini API error: {}", response.status());
            return Err(ProviderError::Api(format!(
                "API error: {}",
                response.status()
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_with_text_only_has_single_part() {
        let body = build_request("What is 2+2?", None);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": "What is 2+2?" }]
                }]
            })
        );
    }

    #[test]
    fn request_with_attachment_adds_inline_data() {
        let attachment = Attachment {
            mime_type: "image/png".to_string(),
            data: vec![0x89, 0x50, 0x4e, 0x47],
        };

        let body = build_request("Describe this", Some(&attachment));

        let json = serde_json::to_value(&body).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "Describe this");
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
        assert_eq!(parts[1]["inline_data"]["data"], BASE64.encode([0x89, 0x50, 0x4e, 0x47]));
    }

    #[test]
    fn extract_text_joins_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "4" }, { "text": " is the answer" }] }
            }]
        }))
        .unwrap();

        assert_eq!(extract_text(response).unwrap(), "4 is the answer");
    }

    #[test]
    fn extract_text_rejects_missing_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();

        assert!(matches!(
            extract_text(response),
            Err(ProviderError::EmptyResponse)
        ));
    }

    #[test]
    fn extract_text_rejects_whitespace_only_text() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        }))
        .unwrap();

        assert!(matches!(
            extract_text(response),
            Err(ProviderError::EmptyResponse)
        ));
    }
}
