//! Gemini API client adapter.

use crate::config::ApiSettings;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Errors from the Gemini `generateContent` call
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Gemini API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Gemini API response contained no text candidate")]
    EmptyResponse,
}

/// `generateContent` response structure, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
    }
}

/// Client for the Gemini generative-text API
///
/// Configured with the API key and model name on every call; the underlying
/// HTTP client is not reused across requests.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from the loaded API settings
    pub fn new(api: &ApiSettings) -> Self {
        Self {
            api_key: api.apikey.clone(),
            model: api.model.clone(),
            base_url: api.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit a single prompt and return the generated text
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request_body = json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        debug!(model = %self.model, "sending generateContent request");

        let client = reqwest::Client::new();
        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let response_data: GenerateContentResponse = response.json().await?;

        response_data.into_text().ok_or(GeminiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_content_response() {
        let raw = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "1日目は浅草を観光します。" }
                        ],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ]
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.into_text().as_deref(),
            Some("1日目は浅草を観光します。")
        );
    }

    #[test]
    fn test_empty_candidates_yield_no_text() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(parsed.into_text().is_none());
    }

    #[test]
    fn test_missing_candidates_field() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_text().is_none());
    }

    #[test]
    fn test_request_url_strips_trailing_slash() {
        let client = GeminiClient::new(&crate::config::ApiSettings {
            apikey: "k".to_string(),
            model: "gemini-pro".to_string(),
            base_url: "https://example.com/v1beta/".to_string(),
        });
        assert_eq!(client.base_url, "https://example.com/v1beta");
    }
}
