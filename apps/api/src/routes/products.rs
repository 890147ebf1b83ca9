//! Product endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use kasir_core::{Product, ProductInput};
use tracing::{error, warn};

use super::{decode_body, method_not_allowed, path_id, Deleted};
use crate::error::{ApiError, ApiResult, INTERNAL_SERVER_ERROR};
use crate::services::Services;

pub fn router() -> Router<Services> {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(method_not_allowed),
        )
}

/// `GET /products`
async fn list_products(State(services): State<Services>) -> ApiResult<Json<Vec<Product>>> {
    let products = services.products.get_all().await.map_err(|e| {
        error!(error = %e, "Failed to list products");
        ApiError::internal(INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(products))
}

/// `POST /products`
///
/// Any create failure is the client's: 400 with the error message.
async fn create_product(
    State(services): State<Services>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let input: ProductInput = decode_body(&body)?;

    let product = services.products.create(&input).await.map_err(|e| {
        warn!(error = %e, "Failed to create product");
        ApiError::invalid_request(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /products/{id}`
async fn get_product(
    State(services): State<Services>,
    uri: Uri,
) -> ApiResult<Json<Product>> {
    let id = path_id(&uri, "Product")?;

    Ok(Json(services.products.get_by_id(&id).await?))
}

/// `PUT /products/{id}`
///
/// The path id is authoritative; any `id` in the body is ignored.
async fn update_product(
    State(services): State<Services>,
    uri: Uri,
    body: Bytes,
) -> ApiResult<Json<Product>> {
    let input: ProductInput = decode_body(&body)?;
    let id = path_id(&uri, "Product")?;

    Ok(Json(services.products.update(&id, &input).await?))
}

/// `DELETE /products/{id}`
async fn delete_product(
    State(services): State<Services>,
    uri: Uri,
) -> ApiResult<Json<Deleted>> {
    let id = path_id(&uri, "Product")?;
    services.products.delete_by_id(&id).await?;

    Ok(Deleted::resource("product"))
}
