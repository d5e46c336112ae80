//! Transport-agnostic core: entities, roles, errors, and the CRUD engine.

pub mod auth;
pub mod catalogue;
pub mod entity;
pub mod error;
pub mod ports;
pub mod resource;

pub use auth::{Role, RoleSet};
pub use catalogue::{Book, BookFields, Movie, MovieFields, Painting, PaintingFields};
pub use entity::Entity;
pub use error::Error;
pub use resource::{DeletionReceipt, ResourceService};
