use serde::{Deserialize, Serialize};

use crate::constants::messages::UNKNOWN_DIRECTOR;

/// A movie record as exchanged with the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub year: i32,
    pub genre: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
}

/// Body of `POST /api/movies`.
///
/// Optional fields are always serialized (as `null` when absent) so the
/// backend receives the full `{title, year, genre, director, description,
/// rating}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub director: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
}

impl Movie {
    #[must_use]
    pub fn director_or_unknown(&self) -> &str {
        self.director
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(UNKNOWN_DIRECTOR)
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

impl From<NewMovie> for Movie {
    fn from(movie: NewMovie) -> Self {
        Self {
            id: None,
            title: movie.title,
            year: movie.year,
            genre: movie.genre,
            director: movie.director,
            description: movie.description,
            rating: movie.rating,
        }
    }
}
