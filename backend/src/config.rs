use std::env;

use tracing::warn;

use crate::error::{AppError, Result};

pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_SERVER_PORT: u16 = 5174;

/// Immutable application configuration, loaded once at startup and passed to
/// constructors.
#[derive(Clone, Debug)]
pub struct Config {
    pub hotpepper_api_key: String,
    pub frontend_origin: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let hotpepper_api_key = env::var("HOTPEPPER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Config("HOTPEPPER_API_KEY must be set in environment".to_string())
            })?;

        let frontend_origin = env::var("FRONTEND_URL").unwrap_or_else(|_| {
            warn!(
                "FRONTEND_URL is not set, using default [{}]",
                DEFAULT_FRONTEND_ORIGIN
            );
            DEFAULT_FRONTEND_ORIGIN.to_string()
        });

        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port.parse().map_err(|_| {
                AppError::Config(format!("SERVER_PORT must be a valid port number: {port}"))
            })?,
            Err(_) => {
                warn!(
                    "SERVER_PORT is not set, using default [{}]",
                    DEFAULT_SERVER_PORT
                );
                DEFAULT_SERVER_PORT
            }
        };

        Ok(Self {
            hotpepper_api_key,
            frontend_origin,
            server_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var manipulation is process-global, so the from_env paths are
    // covered in one test to avoid races between parallel tests.
    #[test]
    fn from_env_requires_api_key_and_applies_defaults() {
        env::remove_var("HOTPEPPER_API_KEY");
        env::remove_var("FRONTEND_URL");
        env::remove_var("SERVER_PORT");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        env::set_var("HOTPEPPER_API_KEY", "test-key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.hotpepper_api_key, "test-key");
        assert_eq!(config.frontend_origin, DEFAULT_FRONTEND_ORIGIN);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);

        env::set_var("FRONTEND_URL", "http://localhost:3000");
        env::set_var("SERVER_PORT", "8080");
        let config = Config::from_env().unwrap();
        assert_eq!(config.frontend_origin, "http://localhost:3000");
        assert_eq!(config.server_port, 8080);

        env::set_var("SERVER_PORT", "not-a-port");
        assert!(Config::from_env().is_err());

        env::remove_var("HOTPEPPER_API_KEY");
        env::remove_var("FRONTEND_URL");
        env::remove_var("SERVER_PORT");
    }
}
