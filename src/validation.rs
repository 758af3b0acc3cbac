//! Client-side checks applied to the add-movie form before anything is sent
//! to the backend. The backend stays the authority; these only catch the
//! obvious mistakes early.

use chrono::Datelike;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::form::{DEFAULT_RATING, EARLIEST_YEAR, MAX_YEARS_AHEAD};
use crate::models::NewMovie;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("invalid year: {0}")]
    InvalidYear(String),
}

impl ValidationError {
    /// The short rejection reason, without the offending field or value.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingRequiredField(_) => "missing required field",
            Self::InvalidYear(_) => "invalid year",
        }
    }
}

/// Raw add-movie form fields, exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieForm {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub director: String,
    pub description: String,
    pub rating: String,
}

#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[must_use]
pub const fn latest_allowed_year(current_year: i32) -> i32 {
    current_year + MAX_YEARS_AHEAD
}

pub fn validate_submission(
    form: &MovieForm,
    current_year: i32,
) -> Result<NewMovie, ValidationError> {
    let title = required(&form.title, "title")?;
    let year = required(&form.year, "year")?;
    let genre = required(&form.genre, "genre")?;

    let year: i32 = year
        .parse()
        .map_err(|_| ValidationError::InvalidYear(year.to_string()))?;

    if !(EARLIEST_YEAR..=latest_allowed_year(current_year)).contains(&year) {
        return Err(ValidationError::InvalidYear(year.to_string()));
    }

    Ok(NewMovie {
        title: title.to_string(),
        year,
        genre: genre.to_string(),
        director: optional(&form.director),
        description: optional(&form.description),
        rating: coerce_rating(&form.rating),
    })
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingRequiredField(field));
    }
    Ok(trimmed)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// Blank means the control was left at its default; anything unparsable
// becomes absent rather than a rejection.
fn coerce_rating(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(DEFAULT_RATING);
    }
    trimmed.parse().ok()
}
