//! The three catalogued resource types.
//!
//! Each module is a trivial instantiation of [`crate::domain::Entity`]:
//! field lists and key kinds only, no behaviour of its own.

mod book;
mod movie;
mod painting;

pub use book::{Book, BookFields};
pub use movie::{Movie, MovieFields};
pub use painting::{Painting, PaintingFields};
