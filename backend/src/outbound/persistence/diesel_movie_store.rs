//! PostgreSQL-backed record store for movies.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Movie;
use crate::domain::ports::{RecordStore, StoreError};

use super::models::MovieRow;
use super::pool::DbPool;
use super::schema::movies;
use super::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the movie record store.
#[derive(Clone)]
pub struct DieselMovieStore {
    pool: DbPool,
}

impl DieselMovieStore {
    /// Create a new store over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Movie> for DieselMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MovieRow> = movies::table
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn get_by_key(&self, key: &String) -> Result<Option<Movie>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MovieRow> = movies::table
            .find(key)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Movie::from))
    }

    // Saves under an existing caller-assigned id overwrite (store-defined).
    async fn save(&self, record: Movie) -> Result<Movie, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = MovieRow::from(record);
        let stored: MovieRow = diesel::insert_into(movies::table)
            .values(row.clone())
            .on_conflict(movies::id)
            .do_update()
            .set(row)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(stored.into())
    }

    async fn delete(&self, record: &Movie) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(movies::table.find(&record.id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
