//! Data Transfer Objects for API communication

pub mod search;
pub mod shop;

pub use search::*;
pub use shop::*;
