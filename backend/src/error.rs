use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API key is not configured")]
    ApiKeyMissing,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream request failed: {0}")]
    Network(String),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Unexpected upstream response format: {0}")]
    Decode(String),

    #[error("Gourmet API error: {message} (code: {code})")]
    Vendor { code: i64, message: String },

    #[error("Shop not found for id: {0}")]
    ShopNotFound(String),

    #[error("Shop id mismatch: requested {requested}, API returned {returned}")]
    ShopIdMismatch { requested: String, returned: String },
}
