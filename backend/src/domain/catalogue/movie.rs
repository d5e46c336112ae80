//! Movie: string, caller-assigned identity.

use serde::{Deserialize, Serialize};

use crate::domain::entity::Entity;

/// A catalogued movie. The caller supplies `id` on creation; keys keep
/// whatever spelling the caller used, including leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub director: String,
    pub release_year: i64,
}

/// Complete replacement field set for a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MovieFields {
    pub title: String,
    pub director: String,
    pub release_year: i64,
}

impl Entity for Movie {
    const NAME: &'static str = "Movie";
    type Key = String;
    type Fields = MovieFields;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn replace_fields(&mut self, fields: MovieFields) {
        let MovieFields {
            title,
            director,
            release_year,
        } = fields;
        self.title = title;
        self.director = director;
        self.release_year = release_year;
    }
}
