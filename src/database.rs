use std::future::Future;
use std::time::Duration;

use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::{pooled_connection::deadpool::Object, AsyncPgConnection};

pub mod diesel_configuration;
pub mod queries;

pub type DatabaseConnection = Object<AsyncPgConnection>;
pub type DatabaseConnectionPool = Pool<AsyncPgConnection>;

pub use diesel_configuration::create_connection_pool;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Could not get a connection from the pool.")]
    Pool(
        #[from]
        deadpool::managed::PoolError<
            diesel_async::pooled_connection::PoolError,
        >,
    ),
    #[error("Failed to execute query.")]
    Query(#[from] diesel::result::Error),
    #[error("Storage operation timed out after {0:?}.")]
    Timeout(Duration),
}

#[tracing::instrument(
    name = "Retrieving database connection from pool.",
    skip(pool)
)]
pub async fn get_connection(
    pool: &DatabaseConnectionPool,
) -> Result<DatabaseConnection, StorageError> {
    match pool.get().await {
        Ok(conn) => {
            tracing::debug!("Connection established.");
            Ok(conn)
        }
        Err(e) => {
            tracing::error!(
                "Could not get connection from pool, with error: {:?}",
                e
            );
            Err(e.into())
        }
    }
}

/// Runs a storage interaction under `limit`. Elapsing drops the in-flight
/// future, which releases its connection back to the pool.
pub async fn with_timeout<F, T>(
    limit: Duration,
    operation: F,
) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, StorageError>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!("Storage operation exceeded {:?}", limit);
            Err(StorageError::Timeout(limit))
        }
    }
}
