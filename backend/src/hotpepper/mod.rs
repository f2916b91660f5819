//! Client for the HotPepper gourmet-search web API.

pub mod client;
pub mod types;

pub use client::HotPepperClient;
pub use types::{GourmetError, GourmetResponse, GourmetResults};
