//! Port abstraction for keyed record persistence and its errors.

use async_trait::async_trait;

use crate::domain::entity::Entity;

/// Persistence errors raised by record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Store connection could not be established.
    #[error("record store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("record store query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Key-addressed persistence for one entity type.
///
/// The store exclusively owns persisted state. Identity uniqueness is its
/// concern: a `save` under an existing key either overwrites or is rejected,
/// store-defined. `list` order is likewise store-defined and not guaranteed
/// stable.
#[async_trait]
pub trait RecordStore<E: Entity>: Send + Sync {
    /// All records currently stored, in store order.
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    /// The record under `key`, if any.
    async fn get_by_key(&self, key: &E::Key) -> Result<Option<E>, StoreError>;

    /// Persist `record` and return it as stored, reflecting any
    /// store-assigned identity.
    async fn save(&self, record: E) -> Result<E, StoreError>;

    /// Remove `record` permanently.
    async fn delete(&self, record: &E) -> Result<(), StoreError>;
}
