//! webreq - composable configuration for outbound HTTP requests
//!
//! This crate provides a catalog of small mutators, each setting one property
//! of an [`HttpRequest`] (headers, method, timeouts, credentials, caching and
//! so on). Mutators are built up front, shared freely, and applied in sequence
//! before the request is handed to reqwest for dispatch.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod mutator;
pub mod mutators;
pub mod request;

pub use error::{Result, WebReqError};
pub use mutator::Mutator;
pub use request::{
    DecompressionMethods, HeaderKey, HttpRequest, RequestCacheLevel, RequestCachePolicy,
    RequestHeader, RequestHeaders,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
