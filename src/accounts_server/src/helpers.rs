use accounts_adapters::config::PostgresSettings;
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Configure and return a PostgreSQL connection pool
///
/// Connects with the configured pool size and runs all pending migrations.
///
/// # Arguments
/// * `url` - Database connection URL
/// * `settings` - Pool settings
pub async fn configure_postgresql(
    url: &Secret<String>,
    settings: &PostgresSettings,
) -> Result<PgPool, BootstrapError> {
    let pg_pool = get_postgres_pool(url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("../../migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
