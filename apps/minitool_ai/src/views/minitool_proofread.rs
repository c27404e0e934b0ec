use axum::{extract::{rejection::JsonRejection, State}, Json};
use minitool_core::{AppState, Mode};

use super::{run, ViewResult};
use crate::serializers::minitool_text::{MinitoolTextIn, MinitoolTextOut};

/// Typo fixes and business-email keigo.
pub async fn proofread(
    State(state): State<AppState>,
    body: Result<Json<MinitoolTextIn>, JsonRejection>,
) -> ViewResult<Json<MinitoolTextOut>> {
    run(&state, Mode::Proofread, body).await
}
