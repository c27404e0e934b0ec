mod menu;

use dotenvy::dotenv;
use minitool_core::{AppState, ModelCfg};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // logs go to stderr so they never interleave with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cfg = ModelCfg::from_env();
    if cfg.api_key.is_none() {
        println!("警告: GEMINI_API_KEY が設定されていません。");
    }
    let state = AppState::from_cfg(&cfg)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(&state, &mut stdin.lock(), &mut stdout.lock()).await?;
    Ok(())
}
