//! In-memory record store backing database-less runs and the HTTP tests.
//!
//! Keeps the same store-defined contract as the Diesel adapters: a save
//! under an existing key overwrites, list order is insertion order, and a
//! key-assignment hook stands in for the database sequence.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::Entity;
use crate::domain::ports::{RecordStore, StoreError};

/// Hook giving a draft record its store-assigned key. Called with the next
/// sequence value on every save; implementations decide whether the record
/// still needs a key.
pub type KeyAssigner<E> = fn(&mut E, i64);

/// Vec-backed record store guarded by an `RwLock`.
pub struct MemoryRecordStore<E: Entity> {
    records: RwLock<Vec<E>>,
    sequence: AtomicI64,
    assign_key: Option<KeyAssigner<E>>,
}

impl<E: Entity> MemoryRecordStore<E> {
    /// Empty store for caller-assigned keys.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            sequence: AtomicI64::new(0),
            assign_key: None,
        }
    }

    /// Empty store whose saves run `assign_key` with a fresh sequence value,
    /// mirroring a database serial column.
    pub fn with_key_assigner(assign_key: KeyAssigner<E>) -> Self {
        Self {
            assign_key: Some(assign_key),
            ..Self::new()
        }
    }

    /// Store preloaded with `records`, preserving their order.
    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records: RwLock::new(records),
            ..Self::new()
        }
    }
}

impl<E: Entity> Default for MemoryRecordStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::query("memory store lock poisoned")
}

#[async_trait]
impl<E: Entity> RecordStore<E> for MemoryRecordStore<E> {
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.records.read().map_err(|_| poisoned())?.clone())
    }

    async fn get_by_key(&self, key: &E::Key) -> Result<Option<E>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.iter().find(|r| r.key() == *key).cloned())
    }

    async fn save(&self, mut record: E) -> Result<E, StoreError> {
        if let Some(assign) = self.assign_key {
            let next = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            assign(&mut record, next);
        }
        let mut records = self.records.write().map_err(|_| poisoned())?;
        match records.iter_mut().find(|r| r.key() == record.key()) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(record)
    }

    async fn delete(&self, record: &E) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.retain(|r| r.key() != record.key());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, BookFields, Painting};

    fn book_store() -> MemoryRecordStore<Book> {
        MemoryRecordStore::with_key_assigner(|book, next| {
            if book.id == Book::UNASSIGNED {
                book.id = next;
            }
        })
    }

    fn fields(title: &str) -> BookFields {
        BookFields {
            title: title.into(),
            author: "me".into(),
            description: "nothing".into(),
            genre: "Action".into(),
        }
    }

    fn painting(code: &str, name: &str) -> Painting {
        Painting {
            code: code.into(),
            name: name.into(),
            artist: "Leonardo da Vinci".into(),
            year: 1503,
            medium: "Oil".into(),
            period: "Renaissance".into(),
        }
    }

    #[tokio::test]
    async fn drafts_receive_sequential_ids() {
        let store = book_store();

        let first = store.save(Book::draft(fields("a"))).await.expect("save");
        let second = store.save(Book::draft(fields("b"))).await.expect("save");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn saves_with_an_assigned_id_keep_it() {
        let store = book_store();

        let stored = store.save(Book::draft(fields("a"))).await.expect("save");
        let mut renamed = stored.clone();
        renamed.title = "b".into();
        let saved = store.save(renamed).await.expect("resave");

        assert_eq!(saved.id, stored.id);
        let listed = store.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "b");
    }

    #[tokio::test]
    async fn duplicate_caller_assigned_key_overwrites() {
        let store = MemoryRecordStore::new();

        store
            .save(painting("mona-lisa", "Mona Lisa"))
            .await
            .expect("save");
        store
            .save(painting("mona-lisa", "La Gioconda"))
            .await
            .expect("overwrite");

        let listed = store.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "La Gioconda");
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_record() {
        let store = MemoryRecordStore::with_records(vec![
            painting("one", "First"),
            painting("two", "Second"),
        ]);

        store
            .delete(&painting("one", "First"))
            .await
            .expect("delete");

        let listed = store.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].code, "two");
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryRecordStore::new();
        for code in ["b", "a", "c"] {
            store.save(painting(code, code)).await.expect("save");
        }

        let codes: Vec<_> = store
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, vec!["b", "a", "c"]);
    }
}
