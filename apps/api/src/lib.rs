//! # Kasir API
//!
//! REST server for the product and category catalogue of Kasir POS.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir API Server                                 │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► routes ───► services ───► kasir-db       │
//! │                                                          (SQLite)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Layered server configuration
//! - [`error`] - `ApiError` and its HTTP mapping
//! - [`services`] - Pass-through services over the repositories
//! - [`routes`] - axum handlers and the router

pub mod config;
pub mod error;
pub mod routes;
pub mod services;

use axum::Router;
use kasir_db::Database;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use services::Services;

/// Builds the application: routes, services and request tracing.
pub fn build_app(db: &Database) -> Router {
    routes::router(Services::new(db)).layer(TraceLayer::new_for_http())
}
