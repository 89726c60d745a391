use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

pub const AD_NOT_FOUND: &str = "advertisement not found";
pub const AD_NAME_TAKEN: &str = "advertisement with this name already exists";
pub const RESOURCE_NOT_FOUND: &str = "resource not found";

/// `{"status": "error", "reason": ...}` with the given status code.
pub fn error<R: Serialize>(status: StatusCode, reason: R) -> Response {
    (status, Json(json!({ "status": "error", "reason": reason }))).into_response()
}

pub fn success() -> Response {
    (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
}

pub async fn fallback() -> Response {
    error(StatusCode::NOT_FOUND, RESOURCE_NOT_FOUND)
}
