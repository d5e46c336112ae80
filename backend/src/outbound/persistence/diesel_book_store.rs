//! PostgreSQL-backed record store for books.
//!
//! Books are the one store-numbered resource: a draft insert omits the id
//! and takes the `BIGSERIAL` value back through `RETURNING`. A save under an
//! existing id overwrites, keeping the store-defined upsert semantics.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Book;
use crate::domain::ports::{RecordStore, StoreError};

use super::models::{BookRow, NewBookRow};
use super::pool::DbPool;
use super::schema::books;
use super::{map_diesel_error, map_pool_error};

/// Diesel-backed implementation of the book record store.
#[derive(Clone)]
pub struct DieselBookStore {
    pool: DbPool,
}

impl DieselBookStore {
    /// Create a new store over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore<Book> for DieselBookStore {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<BookRow> = books::table
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn get_by_key(&self, key: &i64) -> Result<Option<Book>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<BookRow> = books::table
            .find(*key)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Book::from))
    }

    async fn save(&self, record: Book) -> Result<Book, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let stored: BookRow = if record.id == Book::UNASSIGNED {
            diesel::insert_into(books::table)
                .values(NewBookRow::from(record))
                .get_result(&mut conn)
                .await
        } else {
            let row = BookRow::from(record);
            diesel::insert_into(books::table)
                .values(row.clone())
                .on_conflict(books::id)
                .do_update()
                .set(row)
                .get_result(&mut conn)
                .await
        }
        .map_err(map_diesel_error)?;
        Ok(stored.into())
    }

    async fn delete(&self, record: &Book) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(books::table.find(record.id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
