use std::env;

use expense_tracker_back_end::api::{config::ApiConfig, routes::router};
use expense_tracker_back_end::utils::app_config::AppConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let api_config = ApiConfig::from_env();
    tracing::info!("API configuration loaded successfully");

    let app_config = AppConfig::from_env()?;
    tracing::info!("Application configuration loaded successfully");

    let port = match env::var("PORT") {
        Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
            tracing::warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting expense tracker API on {}", addr);

    axum::serve(listener, router(app_config, api_config)).await?;

    Ok(())
}
