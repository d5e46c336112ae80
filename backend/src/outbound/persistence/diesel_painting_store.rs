//! PostgreSQL-backed record store for paintings.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Painting;
use crate::domain::ports::{RecordStore, StoreError};

use super::models::PaintingRow;
use super::pool::DbPool;
use super::schema::paintings;
use super::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the painting record store.
#[derive(Clone)]
pub struct DieselPaintingStore {
    pool: DbPool,
}

impl DieselPaintingStore {
    /// Create a new store over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Painting> for DieselPaintingStore {
    async fn list(&self) -> Result<Vec<Painting>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PaintingRow> = paintings::table
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Painting::from).collect())
    }

    async fn get_by_key(&self, key: &String) -> Result<Option<Painting>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<PaintingRow> = paintings::table
            .find(key)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Painting::from))
    }

    // Saves under an existing caller-assigned code overwrite (store-defined).
    async fn save(&self, record: Painting) -> Result<Painting, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = PaintingRow::from(record);
        let stored: PaintingRow = diesel::insert_into(paintings::table)
            .values(row.clone())
            .on_conflict(paintings::code)
            .do_update()
            .set(row)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(stored.into())
    }

    async fn delete(&self, record: &Painting) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(paintings::table.find(&record.code))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
