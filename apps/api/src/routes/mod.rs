//! # HTTP Routes
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  GET     /health                  → {"status":"OK","message":...}      │
//! │                                                                         │
//! │  GET     /products                → list                               │
//! │  POST    /products                → create (201)                       │
//! │  GET     /products/{id}           → fetch                              │
//! │  PUT     /products/{id}           → replace                            │
//! │  DELETE  /products/{id}           → delete                             │
//! │                                                                         │
//! │  /categories, /categories/{id}    → same shape as products             │
//! │                                                                         │
//! │  Every resource route is also mounted under /api.                      │
//! │  Any other method on a known path → 405.                               │
//! │  Any other path → 404 "Not Found".                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod categories;
pub mod products;

use axum::body::Bytes;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::services::Services;

/// Builds the resource routes, without the `/api` prefix.
fn resource_routes() -> Router<Services> {
    Router::new()
        .merge(categories::router())
        .merge(products::router())
}

/// Builds the full application router.
pub fn router(services: Services) -> Router {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .merge(resource_routes())
        .nest("/api", resource_routes())
        .fallback(not_found)
        .with_state(services)
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check endpoint. Does not touch the database.
async fn health() -> Json<Health> {
    Json(Health {
        status: "OK",
        message: "Server Running",
    })
}

/// Fallback for a known path hit with a method it does not serve.
pub(crate) async fn method_not_allowed() -> impl IntoResponse {
    ApiError::method_not_allowed()
}

/// Fallback for paths no route matches.
async fn not_found() -> impl IntoResponse {
    ApiError::not_found("Not Found")
}

/// Decodes a JSON request body, ignoring `Content-Type`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::invalid_body()
    })
}

/// Parses a path identifier.
///
/// Stored ids are integers, so anything else cannot name a row and is
/// rejected as a bad request. Returns the id in its stored spelling.
pub(crate) fn parse_id(id: &str, resource: &str) -> Result<String, ApiError> {
    id.parse::<i64>()
        .map(|id| id.to_string())
        .map_err(|_| ApiError::invalid_request(format!("Invalid {} ID", resource)))
}

/// Takes the id from the last path segment exactly as sent.
///
/// Percent-escapes are not decoded, so `/products/%31` is not product 1.
pub(crate) fn path_id(uri: &Uri, resource: &str) -> Result<String, ApiError> {
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    parse_id(raw, resource)
}

/// Body of a successful DELETE.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: String,
}

impl Deleted {
    pub fn resource(name: &str) -> Json<Deleted> {
        Json(Deleted {
            message: format!("Successfully deleted {}", name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_normalizes() {
        assert_eq!(parse_id("3", "Category").unwrap(), "3");
        assert_eq!(parse_id("007", "Category").unwrap(), "7");
    }

    #[test]
    fn test_parse_id_rejects_non_integers() {
        let err = parse_id("abc", "Product").unwrap_err();
        assert_eq!(err.message, "Invalid Product ID");

        assert!(parse_id("1.5", "Product").is_err());
    }

    #[test]
    fn test_path_id_keeps_percent_escapes() {
        let uri: Uri = "/api/products/12".parse().unwrap();
        assert_eq!(path_id(&uri, "Product").unwrap(), "12");

        let uri: Uri = "/products/%31".parse().unwrap();
        let err = path_id(&uri, "Product").unwrap_err();
        assert_eq!(err.message, "Invalid Product ID");
    }

    #[test]
    fn test_decode_body_rejects_wrong_shape() {
        let body = Bytes::from_static(br#"{"name": 5}"#);
        let err = decode_body::<kasir_core::CategoryInput>(&body).unwrap_err();

        assert_eq!(err.message, "Invalid Request Body");
    }
}
