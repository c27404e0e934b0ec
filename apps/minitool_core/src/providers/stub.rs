use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::TextModel;

/// In-process model with a canned reply. Counts calls and keeps the last
/// prompt so callers can check what would have been sent.
pub struct StubModel {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(Ok(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(Err(message.into()))
    }

    fn new(reply: Result<String, String>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextModel for StubModel {
    fn name(&self) -> &str {
        "stub"
    }

    fn model_id(&self) -> &str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        self.reply.clone().map_err(anyhow::Error::msg)
    }
}
