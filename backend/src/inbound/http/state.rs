//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the domain services and stay testable without real storage.

use crate::domain::{Book, Movie, Painting, ResourceService};

/// Dependency bundle for HTTP handlers: one service per resource type.
#[derive(Clone)]
pub struct HttpState {
    pub books: ResourceService<Book>,
    pub movies: ResourceService<Movie>,
    pub paintings: ResourceService<Painting>,
}
