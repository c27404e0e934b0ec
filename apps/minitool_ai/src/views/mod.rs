pub mod minitool_proofread;
pub mod minitool_summarize;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use minitool_core::serializers::api_error::ApiError;
use minitool_core::{invoke, AppState, Mode, ModelError};
use tracing::error;

use crate::serializers::minitool_text::{MinitoolTextIn, MinitoolTextOut};

pub type ViewResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Shared body of the text endpoints. The credential is checked before the
/// request body, so an unconfigured server answers 500 for any input.
async fn run(
    state: &AppState,
    mode: Mode,
    body: Result<Json<MinitoolTextIn>, JsonRejection>,
) -> ViewResult<Json<MinitoolTextOut>> {
    if state.model().is_none() {
        return Err(model_error(ModelError::NotConfigured));
    }
    let Json(req) = body.map_err(rejected)?;

    let result = invoke(state.model(), mode, &req.text)
        .await
        .map_err(model_error)?;
    Ok(Json(MinitoolTextOut { result }))
}

// ---------- small helpers ----------
fn model_error(e: ModelError) -> (StatusCode, Json<ApiError>) {
    match e {
        ModelError::EmptyText => unprocessable(&e.to_string()),
        ModelError::NotConfigured | ModelError::CallFailed(_) => {
            error!(error = %e, "text endpoint failed");
            internal(e)
        }
    }
}
fn rejected(e: JsonRejection) -> (StatusCode, Json<ApiError>) {
    (e.status(), Json(ApiError { detail: e.body_text() }))
}
fn unprocessable(msg: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiError { detail: msg.into() }),
    )
}
fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            detail: e.to_string(),
        }),
    )
}
