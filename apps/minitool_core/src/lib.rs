pub mod prompts;
pub mod providers;
pub mod serializers;
pub mod urls;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::providers::gemini::GeminiClient;
use crate::providers::TextModel;

pub use prompts::Mode;
pub use providers::{invoke, ModelError};

pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug)]
pub struct ModelCfg {
    /// Credential for the model provider. Unset or empty disables model calls.
    pub api_key: Option<String>,
    /// Model identifier (default gemini-flash-latest). Override with GEMINI_MODEL.
    pub model: String,
    /// API root, without trailing slash. Override with GEMINI_BASE_URL.
    pub base_url: String,
    /// Per-request timeout in seconds (default 120). Override with GEMINI_TIMEOUT_SECS.
    pub timeout_secs: u64,
}

impl ModelCfg {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get("GEMINI_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let model = get("GEMINI_MODEL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());
        let base_url = get("GEMINI_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let timeout_secs = get("GEMINI_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(120); // 2 minutes

        Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Shared, read-only handle given to every front-end at startup.
#[derive(Clone, Default)]
pub struct AppState {
    model: Option<Arc<dyn TextModel>>,
}

impl AppState {
    /// Builds the Gemini client when a credential is configured. A missing
    /// credential is not an error: the state is created without a model.
    pub fn from_cfg(cfg: &ModelCfg) -> Result<Self> {
        let Some(api_key) = cfg.api_key.clone() else {
            warn!("GEMINI_API_KEY is not set; model calls are disabled");
            return Ok(Self::unconfigured());
        };
        let client = GeminiClient::new(api_key, &cfg.model, &cfg.base_url, cfg.timeout())?;
        info!(model = %cfg.model, "model client ready");
        Ok(Self::with_model(Arc::new(client)))
    }

    pub fn with_model(model: Arc<dyn TextModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn unconfigured() -> Self {
        Self { model: None }
    }

    pub fn model(&self) -> Option<&dyn TextModel> {
        self.model.as_deref()
    }
}
