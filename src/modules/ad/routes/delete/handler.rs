use super::service::service;
use super::types::request;
use crate::{types::Context, utils::id::ResourceId};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    ResourceId(id): ResourceId,
    State(ctx): State<Arc<Context>>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id }).await
}
