use super::types::{request, response};
use crate::{modules::ad::repository, types::Context, utils::validation};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let body = validation::parse::<request::Schema, request::Body>(payload.body).map_err(|errors| {
        tracing::warn!("Failed to validate payload: {} error(s)", errors.len());
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let ad = repository::create(
        &mut *tx,
        repository::CreateAdPayload {
            ad_name: body.ad_name,
            ad_body: body.ad_body,
            ad_owner: body.ad_owner,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::AdNameTaken => response::Error::AdNameTaken,
        repository::Error::UnexpectedError => response::Error::AdCreationFailed,
    })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::debug!("Created ad {}", ad.id);

    Ok(response::Success::AdCreated(ad))
}
