//! OHDSI WebAPI client
//!
//! Typed async client for an OHDSI WebAPI instance with an in-process
//! response cache: bounded, TTL-based, LRU-evicting, keyed by a
//! deterministic rendering of each call's method name and arguments, with a
//! per-call `force_refresh` bypass.

pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;

pub use auth::AuthMethod;
pub use cache::{cache_contents, cache_stats, clear_cache, get_cache_key};
pub use client::WebApiClient;
pub use config::{CacheConfig, ClientConfig};
pub use error::{Result, WebApiError};
