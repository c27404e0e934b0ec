//! Google Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;

use super::TextModel;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse model response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prompt was blocked by the model: {0}")]
    Blocked(String),

    #[error("model response contained no text")]
    EmptyResponse,
}

pub struct GeminiClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, GeminiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint_for(base_url, model),
            model: model.to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `prompt` as a single user turn and returns the model's text.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let payload = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let v: Value = serde_json::from_str(&body)?;
        extract_text(&v)
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        Ok(self.generate_content(prompt).await?)
    }
}

fn endpoint_for(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

/// Prefers the provider's own `error.message`; falls back to the raw body.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body.trim()))
}

/// Joins the text parts of the first candidate, skipping thought parts.
fn extract_text(v: &Value) -> Result<String, GeminiError> {
    if let Some(err) = v.get("error") {
        return Err(GeminiError::Api {
            status: err["code"].as_u64().unwrap_or(0) as u16,
            message: err["message"].as_str().unwrap_or("Unknown error").to_string(),
        });
    }

    let texts: Vec<&str> = v["candidates"][0]["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter(|part| !part["thought"].as_bool().unwrap_or(false))
                .filter_map(|part| part["text"].as_str())
                .collect()
        })
        .unwrap_or_default();

    if texts.is_empty() {
        if let Some(reason) = v["promptFeedback"]["blockReason"].as_str() {
            return Err(GeminiError::Blocked(reason.to_string()));
        }
        return Err(GeminiError::EmptyResponse);
    }
    Ok(texts.concat())
}
