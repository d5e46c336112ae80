//! Row structs bridging the Diesel schema and the domain entities.

use diesel::prelude::*;

use crate::domain::{Book, Movie, Painting};

use super::schema::{books, movies, paintings};

/// A `books` row as read from or written to the database.
#[derive(Debug, Clone, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = books)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

/// A `books` insert leaving the id to the database sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub struct NewBookRow {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

impl From<Book> for BookRow {
    fn from(book: Book) -> Self {
        let Book {
            id,
            title,
            author,
            description,
            genre,
        } = book;
        Self {
            id,
            title,
            author,
            description,
            genre,
        }
    }
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        let BookRow {
            id,
            title,
            author,
            description,
            genre,
        } = row;
        Self {
            id,
            title,
            author,
            description,
            genre,
        }
    }
}

impl From<Book> for NewBookRow {
    fn from(book: Book) -> Self {
        let Book {
            id: _,
            title,
            author,
            description,
            genre,
        } = book;
        Self {
            title,
            author,
            description,
            genre,
        }
    }
}

/// A `movies` row.
#[derive(Debug, Clone, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = movies)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    pub director: String,
    pub release_year: i64,
}

impl From<Movie> for MovieRow {
    fn from(movie: Movie) -> Self {
        let Movie {
            id,
            title,
            director,
            release_year,
        } = movie;
        Self {
            id,
            title,
            director,
            release_year,
        }
    }
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let MovieRow {
            id,
            title,
            director,
            release_year,
        } = row;
        Self {
            id,
            title,
            director,
            release_year,
        }
    }
}

/// A `paintings` row.
#[derive(Debug, Clone, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = paintings)]
pub struct PaintingRow {
    pub code: String,
    pub name: String,
    pub artist: String,
    pub year: i32,
    pub medium: String,
    pub period: String,
}

impl From<Painting> for PaintingRow {
    fn from(painting: Painting) -> Self {
        let Painting {
            code,
            name,
            artist,
            year,
            medium,
            period,
        } = painting;
        Self {
            code,
            name,
            artist,
            year,
            medium,
            period,
        }
    }
}

impl From<PaintingRow> for Painting {
    fn from(row: PaintingRow) -> Self {
        let PaintingRow {
            code,
            name,
            artist,
            year,
            medium,
            period,
        } = row;
        Self {
            code,
            name,
            artist,
            year,
            medium,
            period,
        }
    }
}
