//! Book: numeric, store-assigned identity.

use serde::{Deserialize, Serialize};

use crate::domain::entity::Entity;

/// A catalogued book. `id` is assigned by the record store on first save;
/// a draft carries [`Book::UNASSIGNED`] until then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

/// Complete replacement field set for a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

impl Book {
    /// Sentinel id of a record the store has not yet numbered.
    pub const UNASSIGNED: i64 = 0;

    /// Build a draft for the store to number.
    pub fn draft(fields: BookFields) -> Self {
        let BookFields {
            title,
            author,
            description,
            genre,
        } = fields;
        Self {
            id: Self::UNASSIGNED,
            title,
            author,
            description,
            genre,
        }
    }
}

impl Entity for Book {
    const NAME: &'static str = "Book";
    type Key = i64;
    type Fields = BookFields;

    fn key(&self) -> i64 {
        self.id
    }

    fn replace_fields(&mut self, fields: BookFields) {
        let BookFields {
            title,
            author,
            description,
            genre,
        } = fields;
        self.title = title;
        self.author = author;
        self.description = description;
        self.genre = genre;
    }
}
