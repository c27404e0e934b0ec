//! Model providers and the single shared `invoke` operation.
//!
//! Both front-ends go through [`invoke`], so the credential check, the
//! blank-text check and the error taxonomy are the same everywhere.

pub mod gemini;
pub mod stub;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::prompts::{compose, Mode};

pub use gemini::{GeminiClient, GeminiError};
pub use stub::StubModel;

/// A text-generation backend: prompt in, completion out.
#[async_trait]
pub trait TextModel: Send + Sync {
    fn name(&self) -> &str;

    fn model_id(&self) -> &str;

    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("API Key not configured")]
    NotConfigured,

    #[error("text must not be empty")]
    EmptyText,

    #[error("{0}")]
    CallFailed(String),
}

/// Composes the prompt for `mode` and sends it to `model`.
///
/// No call is made when the model is missing or the text is blank.
pub async fn invoke(
    model: Option<&dyn TextModel>,
    mode: Mode,
    text: &str,
) -> Result<String, ModelError> {
    let Some(model) = model else {
        warn!(%mode, "model call skipped: no credential configured");
        return Err(ModelError::NotConfigured);
    };
    if text.trim().is_empty() {
        return Err(ModelError::EmptyText);
    }

    let prompt = compose(mode, text);
    info!(
        %mode,
        provider = model.name(),
        model = model.model_id(),
        chars = text.chars().count(),
        "invoking model"
    );

    match model.generate(&prompt).await {
        Ok(output) => Ok(output),
        Err(e) => {
            warn!(%mode, error = %e, "model call failed");
            Err(ModelError::CallFailed(e.to_string()))
        }
    }
}
