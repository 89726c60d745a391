use super::service::service;
use super::types::{request, response};
use crate::{types::Context, utils::id::ResourceId};
use axum::extract::{rejection::JsonRejection, Json, State};
use serde_json::Value;
use std::sync::Arc;

pub async fn handler(
    ResourceId(id): ResourceId,
    State(ctx): State<Arc<Context>>,
    body: Result<Json<Value>, JsonRejection>,
) -> response::Response {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        response::Error::InvalidBody(rejection)
    })?;

    service(ctx, request::Payload { id, body }).await
}
