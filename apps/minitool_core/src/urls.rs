use axum::{Router, routing::get};
use crate::views::minitool_health::{healthz, root};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .with_state(state)
}
