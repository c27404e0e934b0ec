use axum::{extract::State, Json};

use crate::serializers::minitool_health::{HealthOut, RootOut};
use crate::AppState;

pub const ROOT_MESSAGE: &str = "AI Mini Tool API は正常に稼働しています！";

pub async fn root() -> Json<RootOut> {
    Json(RootOut { message: ROOT_MESSAGE })
}

pub async fn healthz(State(state): State<AppState>) -> Json<HealthOut> {
    Json(HealthOut {
        ok: true,
        service: "minitool-gateway",
        model: state.model().map(|m| m.model_id().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::providers::StubModel;
    use crate::urls::router;

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let resp = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_is_alive_without_credential() {
        let (status, body) = get_json(AppState::unconfigured(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": ROOT_MESSAGE }));
    }

    #[tokio::test]
    async fn healthz_reports_model() {
        let state = AppState::with_model(Arc::new(StubModel::replying("x")));
        let (status, body) = get_json(state, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["model"], "stub");

        let (_, body) = get_json(AppState::unconfigured(), "/healthz").await;
        assert!(body["model"].is_null());
    }
}
