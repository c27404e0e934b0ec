use serde::Serialize;

#[derive(Serialize)]
pub struct RootOut { pub message: &'static str }

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
    pub service: &'static str,
    /// model identifier, or null when no credential is configured
    pub model: Option<String>,
}
