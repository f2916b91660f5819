//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the frontend and the backend
//! API. All DTOs use JSON serialization via `serde`.
//!
//! ## Wire format
//!
//! - Search request fields use the camelCase names the frontend sends
//!   (`genreCodes`, `radiusCode`).
//! - Shop records keep the vendor's snake_case field names end to end, so the
//!   backend is a pass-through for them.
//! - Optional request fields are omitted from JSON when `None`.

pub mod dto;

pub use dto::*;
