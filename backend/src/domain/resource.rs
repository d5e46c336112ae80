//! Generic CRUD engine shared by every resource type.
//!
//! One `ResourceService<E>` per entity type wraps a [`RecordStore`] and adds
//! the behaviour the stores do not carry: role preconditions, lookup-or-fail
//! semantics, full-replace updates, and deletion receipts. The service holds
//! no state between requests; racing writers on the same key are arbitrated
//! by the store alone.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::auth::RoleSet;
use crate::domain::entity::Entity;
use crate::domain::error::Error;
use crate::domain::ports::{RecordStore, StoreError};

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletionReceipt {
    /// `"<EntityType> with id <key> deleted"`.
    pub message: String,
}

fn map_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => Error::unavailable(message),
        StoreError::Query { message } => Error::internal(message),
    }
}

/// The resource access controller, instantiated once per entity type.
#[derive(Clone)]
pub struct ResourceService<E: Entity> {
    store: Arc<dyn RecordStore<E>>,
}

impl<E: Entity> ResourceService<E> {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn RecordStore<E>>) -> Self {
        Self { store }
    }

    /// List every record, in store order. Reader role required.
    pub async fn list(&self, caller: &RoleSet) -> Result<Vec<E>, Error> {
        caller.require_reader()?;
        self.store.list().await.map_err(map_store_error)
    }

    /// Fetch the record under `key`. Reader role required.
    pub async fn get(&self, caller: &RoleSet, key: &E::Key) -> Result<E, Error> {
        caller.require_reader()?;
        self.fetch(key).await
    }

    /// Persist a caller-constructed record. Admin role required.
    ///
    /// This is an unconditional insert: no existence check is performed, so
    /// a pre-existing caller-assigned key follows the store's overwrite or
    /// reject semantics. The returned record reflects any store-assigned
    /// identity.
    pub async fn create(&self, caller: &RoleSet, draft: E) -> Result<E, Error> {
        caller.require_admin()?;
        self.store.save(draft).await.map_err(map_store_error)
    }

    /// Replace every data field of the record under `key`. Admin role
    /// required.
    ///
    /// Full replace, not patch: `fields` carries the complete data-field
    /// set, and the stored identity is kept even if the caller supplied a
    /// different one. A missing record fails with `NotFound` before any
    /// `save` is attempted.
    pub async fn update(
        &self,
        caller: &RoleSet,
        key: &E::Key,
        fields: E::Fields,
    ) -> Result<E, Error> {
        caller.require_admin()?;
        let mut record = self.fetch(key).await?;
        record.replace_fields(fields);
        self.store.save(record).await.map_err(map_store_error)
    }

    /// Remove the record under `key`. Admin role required.
    ///
    /// A missing record fails with `NotFound` before any `delete` is
    /// attempted. Deletion is terminal for the record.
    pub async fn delete(&self, caller: &RoleSet, key: &E::Key) -> Result<DeletionReceipt, Error> {
        caller.require_admin()?;
        let record = self.fetch(key).await?;
        self.store.delete(&record).await.map_err(map_store_error)?;
        Ok(DeletionReceipt {
            message: format!("{} with id {} deleted", E::NAME, key),
        })
    }

    async fn fetch(&self, key: &E::Key) -> Result<E, Error> {
        self.store
            .get_by_key(key)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(E::NAME, key))
    }
}
