use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Ad {
    pub id: i32,
    pub ad_name: String,
    pub ad_body: String,
    pub ad_owner: String,
    pub created_at: NaiveDateTime,
}

pub struct CreateAdPayload {
    pub ad_name: String,
    pub ad_body: String,
    pub ad_owner: String,
}

#[derive(Debug)]
pub enum Error {
    AdNameTaken,
    UnexpectedError,
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|err| err.is_unique_violation())
        .unwrap_or(false)
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateAdPayload) -> Result<Ad, Error> {
    match sqlx::query_as::<_, Ad>(
        "
        INSERT INTO advertisements
        (ad_name, ad_body, ad_owner)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(&payload.ad_name)
    .bind(payload.ad_body)
    .bind(payload.ad_owner)
    .fetch_one(e)
    .await
    {
        Ok(ad) => Ok(ad),
        Err(err) if is_unique_violation(&err) => {
            tracing::warn!("Ad name {:?} is already taken", payload.ad_name);
            Err(Error::AdNameTaken)
        }
        Err(err) => {
            tracing::error!("{}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Option<Ad>, Error> {
    match sqlx::query_as::<_, Ad>("SELECT * FROM advertisements WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
    {
        Ok(ad) => Ok(ad),
        Err(err) => {
            tracing::error!("Error occurred while fetching ad with id {}: {}", id, err);
            Err(Error::UnexpectedError)
        }
    }
}

/// Fields left as `None` keep their stored value.
pub struct UpdateAdPayload {
    pub ad_name: Option<String>,
    pub ad_body: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    payload: UpdateAdPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
            UPDATE advertisements SET
                ad_name = COALESCE($1, ad_name),
                ad_body = COALESCE($2, ad_body)
            WHERE
                id = $3
        ",
    )
    .bind(payload.ad_name)
    .bind(payload.ad_body)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        if is_unique_violation(&err) {
            tracing::warn!("Rename of ad {} collides with an existing ad name", id);
            return Error::AdNameTaken;
        }

        tracing::error!(
            "Error occurred while trying to update an ad by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<(), Error> {
    sqlx::query("DELETE FROM advertisements WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete an ad by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
