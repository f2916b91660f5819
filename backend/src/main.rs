//! # Backend Service
//!
//! Thin entry point: logging, environment, configuration, then the server.

use backend::{server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables (.env is optional)
    dotenvy::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(log_level.clone())
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    tracing::info!("GOURMET SEARCH GATEWAY STARTING");
    tracing::info!("Log level: {}", log_level);

    let config = Config::from_env()?;
    server::start_server(config).await
}
