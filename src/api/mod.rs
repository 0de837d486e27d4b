//! HTTP API Client
//!
//! Transport layer plus the endpoint wrappers for talking to the Tally API.

pub mod auth;
pub mod client;
pub mod records;
pub mod summary;

pub use client::{get_api_base, ApiClient, ApiError, DEFAULT_API_BASE};
