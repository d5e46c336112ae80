//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the database migrations exactly; `diesel print-schema`
//! can regenerate them from a live database.

diesel::table! {
    /// Books, numbered by the database (`BIGSERIAL`).
    books (id) {
        id -> Int8,
        title -> Text,
        author -> Text,
        description -> Text,
        genre -> Text,
    }
}

diesel::table! {
    /// Movies, keyed by a caller-assigned string id.
    movies (id) {
        id -> Text,
        title -> Text,
        director -> Text,
        release_year -> Int8,
    }
}

diesel::table! {
    /// Paintings, keyed by a caller-assigned code.
    paintings (code) {
        code -> Text,
        name -> Text,
        artist -> Text,
        year -> Int4,
        medium -> Text,
        period -> Text,
    }
}
