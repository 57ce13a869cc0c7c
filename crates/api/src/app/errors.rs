use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopfront_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::UnknownCategory(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_category", err.to_string())
        }
        DomainError::InvalidId(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
