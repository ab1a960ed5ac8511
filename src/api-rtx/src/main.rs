use anyhow::Context;
use core_rtx::{RobotsConfigFile, get_app_env, get_app_url, get_bind_address, get_config_path, setup_logging};

use api_rtx::{routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    setup_logging("api_rtx=debug,core_rtx=info,tower_http=debug");

    let config_path = get_config_path();
    let config_file = RobotsConfigFile::load(&config_path)
        .with_context(|| format!("Failed to load robots.txt config {}", config_path.display()))?;

    let app_env = get_app_env();
    let app_url = get_app_url().or(config_file.app_url.clone());
    tracing::info!(
        "Serving robots.txt for environment '{}' from {} (sitemap base: {})",
        app_env,
        config_path.display(),
        app_url.as_deref().unwrap_or("request Host header")
    );

    let state = AppState::new(config_file.environment(&app_env), app_url.as_deref())
        .context("Invalid APP_URL / app_url")?;
    let app = routes::router(state);

    let addr = get_bind_address().context("Invalid HOST or PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
