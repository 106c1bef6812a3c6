//! API Layer
//!
//! HTTP client for the remote metrics API.

pub mod client;

pub use client::{get_api_base, set_api_base, ApiError};
