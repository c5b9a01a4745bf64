//! Free-text search over titles and directors.

use crate::selection::ActiveSelection;
use crate::traits::Filter;
use data_loader::Film;

/// Keeps films whose title or directors contain the query, ignoring case.
///
/// An empty query matches everything.
pub struct SearchFilter;

impl SearchFilter {
    fn matches_lowered(film: &Film, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        film.title.to_lowercase().contains(needle)
            || film
                .directors()
                .is_some_and(|directors| directors.to_lowercase().contains(needle))
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, film: &Film, selection: &ActiveSelection) -> bool {
        Self::matches_lowered(film, &selection.query.to_lowercase())
    }

    // Lowercase the query once per pass instead of once per film.
    fn apply<'a>(&self, films: Vec<&'a Film>, selection: &ActiveSelection) -> Vec<&'a Film> {
        if selection.query.is_empty() {
            return films;
        }
        let needle = selection.query.to_lowercase();
        films
            .into_iter()
            .filter(|film| Self::matches_lowered(film, &needle))
            .collect()
    }
}
