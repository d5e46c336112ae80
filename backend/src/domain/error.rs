//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and response bodies; nothing here knows about actix or JSON.

use crate::domain::auth::Role;

/// Failure categories surfaced by the resource services.
///
/// `NotFound` and `Forbidden` are per-request outcomes detected at the
/// service boundary. `Unavailable` and `Internal` wrap store or wiring
/// failures; neither is retried anywhere.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No record with the given key exists for the entity type.
    #[error("{entity} with id {key} not found")]
    NotFound {
        /// Entity type name as shown to callers, e.g. `Book`.
        entity: &'static str,
        /// The key rendered exactly as the caller supplied it.
        key: String,
    },

    /// The caller's role set does not satisfy the operation's precondition.
    #[error("caller lacks the {role} role")]
    Forbidden {
        /// The role the operation requires.
        role: Role,
    },

    /// Login failed; only the session layer raises this.
    #[error("{message}")]
    Unauthorized { message: String },

    /// The record store could not be reached.
    #[error("{message}")]
    Unavailable { message: String },

    /// Unexpected failure inside the store or the wiring.
    #[error("{message}")]
    Internal { message: String },
}

impl Error {
    /// A lookup miss for `entity` under `key`.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// The caller is missing `role`.
    pub fn forbidden(role: Role) -> Self {
        Self::Forbidden { role }
    }

    /// Convenience constructor for [`Error::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
