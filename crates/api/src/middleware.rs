use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::context::RequestContext;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach a [`RequestContext`] to the request and log the outcome.
pub async fn request_logging(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::new();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    req.extensions_mut().insert(ctx);

    let mut res = next.run(req).await;

    let elapsed_ms = (Utc::now() - ctx.received_at()).num_milliseconds();
    tracing::info!(
        request_id = %ctx.request_id(),
        %method,
        path = %path,
        status = res.status().as_u16(),
        elapsed_ms,
        "request handled"
    );

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id().to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    res
}
