//! # Server Setup
//!
//! Router construction, CORS policy, and HTTP server startup.

use std::sync::Arc;

use axum::extract::FromRef;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::handlers;
use crate::hotpepper::HotPepperClient;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub hotpepper: Arc<HotPepperClient>,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<HotPepperClient> {
    fn from_ref(state: &AppState) -> Self {
        state.hotpepper.clone()
    }
}

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Result<Router> {
    let origin = state
        .config
        .frontend_origin
        .parse::<HeaderValue>()
        .map_err(|_| {
            AppError::Config(format!(
                "FRONTEND_URL is not a valid origin: {}",
                state.config.frontend_origin
            ))
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .allow_credentials(true);

    Ok(Router::new()
        .route("/", get(handlers::health))
        .route("/api/hp/search", post(handlers::search_restaurants))
        .route("/api/hp/shops/:id", get(handlers::get_shop_details))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Initialize the upstream client and serve until shutdown.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let hotpepper = Arc::new(HotPepperClient::new(config.hotpepper_api_key.clone())?);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let state = AppState { config, hotpepper };
    let app = create_router(state)?;

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("SERVER READY: http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
