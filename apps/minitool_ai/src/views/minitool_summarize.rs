use axum::{extract::{rejection::JsonRejection, State}, Json};
use minitool_core::{AppState, Mode};

use super::{run, ViewResult};
use crate::serializers::minitool_text::{MinitoolTextIn, MinitoolTextOut};

/// Key points of the text as three bullet items.
pub async fn summarize(
    State(state): State<AppState>,
    body: Result<Json<MinitoolTextIn>, JsonRejection>,
) -> ViewResult<Json<MinitoolTextOut>> {
    run(&state, Mode::Summarize, body).await
}
