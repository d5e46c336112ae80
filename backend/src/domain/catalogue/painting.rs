//! Painting: string, caller-assigned identity under the `code` field.

use serde::{Deserialize, Serialize};

use crate::domain::entity::Entity;

/// A catalogued painting, keyed by a caller-assigned `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Painting {
    pub code: String,
    pub name: String,
    pub artist: String,
    pub year: i32,
    pub medium: String,
    pub period: String,
}

/// Complete replacement field set for a painting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaintingFields {
    pub name: String,
    pub artist: String,
    pub year: i32,
    pub medium: String,
    pub period: String,
}

impl Entity for Painting {
    const NAME: &'static str = "Painting";
    type Key = String;
    type Fields = PaintingFields;

    fn key(&self) -> String {
        self.code.clone()
    }

    fn replace_fields(&mut self, fields: PaintingFields) {
        let PaintingFields {
            name,
            artist,
            year,
            medium,
            period,
        } = fields;
        self.name = name;
        self.artist = artist;
        self.year = year;
        self.medium = medium;
        self.period = period;
    }
}
