//! Ports (driven interfaces) the domain depends on.

pub mod record_store;

pub use record_store::{RecordStore, StoreError};
