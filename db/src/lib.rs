pub mod error;
pub mod models;
pub mod test_utils;

pub use error::{StoreError, StoreResult};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use util::db_url::to_url;

/// Both connection attempts failed.
#[derive(Debug, thiserror::Error)]
#[error("primary database unreachable ({primary}); fallback unreachable ({fallback})")]
pub struct ConnectError {
    pub primary: DbErr,
    pub fallback: DbErr,
}

/// Opens the store, trying `primary` first and `fallback` once if that fails.
///
/// Each target may be a DSN (`sqlite:`, `postgres://`, `mysql://`) or a bare SQLite file
/// path. There is no retry beyond the single fallback attempt.
pub async fn connect(primary: &str, fallback: &str) -> Result<DatabaseConnection, ConnectError> {
    let primary_err = match open(primary).await {
        Ok(db) => {
            tracing::info!(url = %redact(primary), "Database connected");
            return Ok(db);
        }
        Err(err) => err,
    };

    tracing::error!(url = %redact(primary), error = %primary_err, "Database connection failed");
    tracing::warn!(url = %redact(fallback), "Trying local fallback database");

    match open(fallback).await {
        Ok(db) => {
            tracing::info!(url = %redact(fallback), "Fallback database connected");
            Ok(db)
        }
        Err(fallback_err) => {
            tracing::error!(
                url = %redact(fallback),
                error = %fallback_err,
                "Fallback database connection failed"
            );
            Err(ConnectError {
                primary: primary_err,
                fallback: fallback_err,
            })
        }
    }
}

/// Applies pending migrations, creating tables and unique indexes.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

async fn open(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(to_url(path_or_url));
    opt.sqlx_logging(false);
    Database::connect(opt).await
}

/// Strips credentials from a URL before it is logged.
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_owned(),
    }
}
