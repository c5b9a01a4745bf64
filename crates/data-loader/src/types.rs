//! Core domain types for the film dataset.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `Film`, one record of the JSON document
//! - `Dataset`, the ordered, immutable collection of films

use serde::{Deserialize, Serialize};

use crate::parser;

// =============================================================================
// Type Aliases
// =============================================================================

/// Release year of a film
pub type Year = i32;

// =============================================================================
// Film
// =============================================================================

/// One film record, exactly as supplied by the JSON document.
///
/// Fields are never rewritten after load. Optional text fields that arrive
/// as empty strings are kept verbatim and read through the accessors, which
/// treat `""` the same as a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub release_year: Year,
    #[serde(default)]
    pub country: Option<String>,
    /// A single opaque string, even when it names several people
    #[serde(default)]
    pub directors: Option<String>,
    /// Currency text such as `"$1,234,567"`
    pub box_office: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub film_url: String,
}

impl Film {
    /// Country, if present and non-empty
    pub fn country(&self) -> Option<&str> {
        non_empty(&self.country)
    }

    /// Directors string, if present and non-empty
    pub fn directors(&self) -> Option<&str> {
        non_empty(&self.directors)
    }

    /// Image URL, if present and non-empty
    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }

    /// Numeric box office value.
    ///
    /// Always finite; unparseable text reads as `0.0`. See
    /// [`parser::parse_box_office`].
    pub fn box_office_value(&self) -> f64 {
        parser::parse_box_office(&self.box_office)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

// =============================================================================
// Dataset
// =============================================================================

/// The full, ordered film dataset.
///
/// Built once at load time and read-only afterwards: there are no mutators,
/// only borrowing accessors. Filtering produces `&Film` references into
/// this store rather than copies.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub(crate) films: Vec<Film>,
}

impl Dataset {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self { films: Vec::new() }
    }

    /// Wraps an already-parsed list of films, keeping their order
    pub fn from_films(films: Vec<Film>) -> Self {
        Self { films }
    }

    /// All films in source order
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Get a film by its position in the source document
    pub fn get(&self, index: usize) -> Option<&Film> {
        self.films.get(index)
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Film> {
        self.films.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Film;
    type IntoIter = std::slice::Iter<'a, Film>;

    fn into_iter(self) -> Self::IntoIter {
        self.films.iter()
    }
}
