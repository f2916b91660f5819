use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shared::{ErrorResponse, SearchRequest, SearchResponse, ShopDetailResponse};
use tracing::{error, info};

use crate::error::AppError;
use crate::hotpepper::HotPepperClient;

const DEFAULT_START: u32 = 1;
const DEFAULT_COUNT: u32 = 10;

/// Handle `POST /api/hp/search`: search restaurants through the gourmet API.
pub async fn search_restaurants(
    State(hotpepper): State<Arc<HotPepperClient>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SearchResponse>), (StatusCode, Json<ErrorResponse>)> {
    let Json(mut req) = payload.map_err(|rejection| {
        error!("search request body rejected: {}", rejection.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid request format: {}", rejection.body_text()),
            }),
        )
    })?;

    // Pagination defaults
    if req.start == 0 {
        req.start = DEFAULT_START;
    }
    if req.count == 0 {
        req.count = DEFAULT_COUNT;
    }

    let results = hotpepper.search(&req).await.map_err(|e| {
        error!("restaurant search failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Restaurant search failed: {e}"),
            }),
        )
    })?;

    info!(
        available = results.results_available,
        start = results.results_start,
        "search completed"
    );

    let results_returned = results.returned_count();
    Ok((
        StatusCode::OK,
        Json(SearchResponse {
            shops: results.shops,
            results_available: results.results_available,
            results_returned,
            results_start: results.results_start,
        }),
    ))
}

/// Handle `GET /api/hp/shops/:id`: fetch one shop's details.
pub async fn get_shop_details(
    State(hotpepper): State<Arc<HotPepperClient>>,
    Path(shop_id): Path<String>,
) -> Result<(StatusCode, Json<ShopDetailResponse>), (StatusCode, Json<ErrorResponse>)> {
    if shop_id.is_empty() {
        error!("shop detail request without an id");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Shop id is required".to_string(),
            }),
        ));
    }

    match hotpepper.shop_details(&shop_id).await {
        Ok(shop) => Ok((StatusCode::OK, Json(ShopDetailResponse { shop }))),
        Err(err) => {
            error!(%shop_id, "shop detail lookup failed: {err}");
            let (status, message) = match &err {
                AppError::ShopNotFound(_) | AppError::ShopIdMismatch { .. } => {
                    (StatusCode::NOT_FOUND, err.to_string())
                }
                // Keep key problems out of client-visible messages.
                AppError::ApiKeyMissing | AppError::Config(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A server error occurred".to_string(),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to fetch shop details: {err}"),
                ),
            };
            Err((status, Json(ErrorResponse { error: message })))
        }
    }
}

/// Handle `GET /`: liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "HelloWorld!" }))
}
