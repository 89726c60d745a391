use super::types::{request, response};
use crate::{modules::ad::repository, types::Context, utils::validation};
use std::sync::Arc;

/// Empty strings count as "not supplied", like absent fields.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let body = validation::parse::<request::Schema, request::Body>(payload.body).map_err(|errors| {
        tracing::warn!("Failed to validate payload: {} error(s)", errors.len());
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    repository::find_by_id(&mut *tx, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchAd)?
        .ok_or(response::Error::AdNotFound)?;

    if body.ad_owner.is_some() {
        tracing::debug!("Ignoring ad_owner in update of ad {}", payload.id);
    }

    repository::update_by_id(
        &mut *tx,
        payload.id,
        repository::UpdateAdPayload {
            ad_name: supplied(body.ad_name),
            ad_body: supplied(body.ad_body),
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::AdNameTaken => response::Error::AdNameTaken,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateAd,
    })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::AdUpdated)
}
