use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::app::dto;
use crate::app::services::CatalogServices;

/// `GET /api/products`: the mock remote segment, never cached.
pub async fn list_products(
    Extension(services): Extension<Arc<CatalogServices>>,
) -> axum::response::Response {
    let body = dto::ProductsResponse {
        products: services.remote_products(),
    };
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-store")],
        Json(body),
    )
        .into_response()
}
