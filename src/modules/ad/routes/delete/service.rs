use super::types::{request, response};
use crate::{modules::ad::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    repository::find_by_id(&mut *tx, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAd)?
        .ok_or(response::Error::AdNotFound)?;

    repository::delete_by_id(&mut *tx, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAd)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::debug!("Deleted ad {}", payload.id);

    Ok(response::Success::AdDeleted)
}
