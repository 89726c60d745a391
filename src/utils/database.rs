use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migrate(#[source] MigrateError),
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("Error connecting to database: {}", err);
            Error::Connect(err)
        })
}

/// Creates the `advertisements` table and its indexes when they are missing.
pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("{}", err);
        Error::Migrate(err)
    })
}
