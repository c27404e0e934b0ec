use axum::{extract::DefaultBodyLimit, Router};
use dotenvy::dotenv;
use minitool_core::{AppState, ModelCfg};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let port: u16 = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(8000);

    let cfg = ModelCfg::from_env();
    let state = AppState::from_cfg(&cfg)?;
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .merge(minitool_core::urls::router(state.clone()))
        .merge(minitool_ai::urls::router(state))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::very_permissive())
}
