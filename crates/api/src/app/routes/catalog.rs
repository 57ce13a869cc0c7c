use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use shopfront_products::results_label;

use crate::app::services::CatalogServices;
use crate::app::{dto, errors};
use crate::context::RequestContext;

pub fn router() -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/compare", get(compare))
}

pub async fn search(
    Extension(services): Extension<Arc<CatalogServices>>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let request = match query.into_request() {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let products = services.search(&request);
    tracing::debug!(
        request_id = %ctx.request_id(),
        category = %request.category,
        matched = products.len(),
        "catalog search"
    );

    let body = dto::SearchResponse {
        count: products.len(),
        label: results_label(products.len()),
        products,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn compare(
    Extension(services): Extension<Arc<CatalogServices>>,
    Query(query): Query<dto::CompareQuery>,
) -> axum::response::Response {
    let summary = services.compare(query.a.as_deref(), query.b.as_deref());
    (StatusCode::OK, Json(dto::CompareResponse { summary })).into_response()
}
