pub mod config;
pub mod error;
pub mod handlers;
pub mod hotpepper;
pub mod server;

pub use config::Config;
pub use error::{AppError, Result};
