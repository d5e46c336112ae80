//! Persistence adapters: Diesel-backed PostgreSQL stores plus an in-memory
//! store for database-less runs and tests.

mod diesel_book_store;
mod diesel_movie_store;
mod diesel_painting_store;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_book_store::DieselBookStore;
pub use diesel_movie_store::DieselMovieStore;
pub use diesel_painting_store::DieselPaintingStore;
pub use memory::MemoryRecordStore;
pub use pool::{DbPool, PoolConfig, PoolError};

use tracing::debug;

use crate::domain::ports::StoreError;

/// Map pool checkout failures to the port's connection error.
fn map_pool_error(error: PoolError) -> StoreError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    StoreError::connection(message)
}

/// Map common Diesel error variants onto the port error. Detail goes to the
/// log; callers see a stable category.
fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreError::connection("database connection error")
        }
        _ => StoreError::query("database error"),
    }
}
