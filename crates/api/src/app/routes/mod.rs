use axum::{Router, routing::get};

pub mod catalog;
pub mod products;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/products", get(products::list_products))
        .nest("/catalog", catalog::router())
}
