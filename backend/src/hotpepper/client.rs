use std::time::Duration;

use reqwest::{Client, StatusCode};
use shared::{SearchRequest, Shop};
use tracing::{debug, error, info};

use super::types::{GourmetResponse, GourmetResults};
use crate::error::{AppError, Result};

const GOURMET_API_BASE_URL: &str = "http://webservice.recruit.co.jp/hotpepper/gourmet/v1/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_START: u32 = 1;
const DEFAULT_COUNT: u32 = 10;

/// Client for the gourmet API. Safe to share across request tasks; reqwest
/// pools connections internally.
pub struct HotPepperClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HotPepperClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, GOURMET_API_BASE_URL)
    }

    /// Same as [`new`](Self::new) but against a caller-supplied endpoint.
    /// Tests point this at a local stub server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Search restaurants with the given conditions.
    pub async fn search(&self, params: &SearchRequest) -> Result<GourmetResults> {
        if self.api_key.is_empty() {
            return Err(AppError::ApiKeyMissing);
        }

        debug!(?params, "searching restaurants");
        self.fetch(&self.search_query(params)).await
    }

    /// Look up a single shop by id and verify the vendor returned the shop we
    /// asked for.
    pub async fn shop_details(&self, shop_id: &str) -> Result<Shop> {
        if shop_id.is_empty() {
            return Err(AppError::InvalidInput("shop id is required".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(AppError::ApiKeyMissing);
        }

        debug!(shop_id, "fetching shop details");
        let query = [
            ("key", self.api_key.clone()),
            ("format", "json".to_string()),
            ("id", shop_id.to_string()),
            ("count", "1".to_string()),
        ];
        let mut results = self.fetch(&query).await?;

        if results.shops.is_empty() {
            info!(shop_id, "no shop found for id");
            return Err(AppError::ShopNotFound(shop_id.to_string()));
        }

        let shop = results.shops.remove(0);
        if shop.id != shop_id {
            return Err(AppError::ShopIdMismatch {
                requested: shop_id.to_string(),
                returned: shop.id,
            });
        }
        Ok(shop)
    }

    /// Issue one GET against the gourmet endpoint and decode the envelope.
    /// A 200 response carrying a vendor `error` array is still a failure.
    async fn fetch(&self, query: &[(&'static str, String)]) -> Result<GourmetResults> {
        let response = self
            .client
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if status != StatusCode::OK {
            error!(status = status.as_u16(), "gourmet API returned an error status");
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GourmetResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("{e} (body: {body})")))?;
        let results = decoded.results;

        if let Some(first) = results.error.as_ref().and_then(|errors| errors.first()) {
            return Err(AppError::Vendor {
                code: first.code,
                message: first.message.clone(),
            });
        }

        Ok(results)
    }

    /// Translate the client request into vendor query parameters, dropping
    /// empty optionals and defaulting pagination.
    fn search_query(&self, params: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("key", self.api_key.clone()),
            ("format", "json".to_string()),
        ];

        if let Some(keyword) = params.keyword.as_deref().filter(|k| !k.is_empty()) {
            query.push(("keyword", keyword.to_string()));
        }
        if !params.genre_codes.is_empty() {
            query.push(("genre", params.genre_codes.join(",")));
        }
        if let Some(radius) = params.radius_code.as_deref().filter(|r| !r.is_empty()) {
            query.push(("range", radius.to_string()));
        }
        if let Some(lat) = params.lat {
            query.push(("lat", lat.to_string()));
        }
        if let Some(lng) = params.lng {
            query.push(("lng", lng.to_string()));
        }

        let start = if params.start > 0 { params.start } else { DEFAULT_START };
        let count = if params.count > 0 { params.count } else { DEFAULT_COUNT };
        query.push(("start", start.to_string()));
        query.push(("count", count.to_string()));

        query
    }
}
