//! Category endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use kasir_core::{Category, CategoryInput};
use tracing::{error, warn};

use super::{decode_body, method_not_allowed, path_id, Deleted};
use crate::error::{ApiError, ApiResult, INTERNAL_SERVER_ERROR};
use crate::services::Services;

pub fn router() -> Router<Services> {
    Router::new()
        .route(
            "/categories",
            get(list_categories)
                .post(create_category)
                .fallback(method_not_allowed),
        )
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category)
                .fallback(method_not_allowed),
        )
}

async fn list_categories(State(services): State<Services>) -> ApiResult<Json<Vec<Category>>> {
    let categories = services.categories.get_all().await.map_err(|e| {
        error!(error = %e, "Failed to list categories");
        ApiError::internal(INTERNAL_SERVER_ERROR)
    })?;

    Ok(Json(categories))
}

async fn create_category(
    State(services): State<Services>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let input: CategoryInput = decode_body(&body)?;

    let category = services.categories.create(&input).await.map_err(|e| {
        warn!(error = %e, "Failed to create category");
        ApiError::invalid_request(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(category)))
}

async fn get_category(
    State(services): State<Services>,
    uri: Uri,
) -> ApiResult<Json<Category>> {
    let id = path_id(&uri, "Category")?;

    Ok(Json(services.categories.get_by_id(&id).await?))
}

async fn update_category(
    State(services): State<Services>,
    uri: Uri,
    body: Bytes,
) -> ApiResult<Json<Category>> {
    let input: CategoryInput = decode_body(&body)?;
    let id = path_id(&uri, "Category")?;

    Ok(Json(services.categories.update(&id, &input).await?))
}

async fn delete_category(
    State(services): State<Services>,
    uri: Uri,
) -> ApiResult<Json<Deleted>> {
    let id = path_id(&uri, "Category")?;
    services.categories.delete_by_id(&id).await?;

    Ok(Deleted::resource("category"))
}
