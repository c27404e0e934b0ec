use axum::{Router, routing::post};
use minitool_core::AppState;
use crate::views::{minitool_proofread::proofread, minitool_summarize::summarize};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(summarize))
        .route("/proofread", post(proofread))
        .with_state(state)
}
