//! Director facet filter.

use crate::selection::ActiveSelection;
use crate::traits::Filter;
use data_loader::Film;

/// Keeps films whose directors string equals one of the selected values.
///
/// The directors field is opaque: `"Joel Coen, Ethan Coen"` only matches a
/// selection of that exact string, never `"Joel Coen"` alone.
pub struct DirectorFilter;

impl Filter for DirectorFilter {
    fn name(&self) -> &str {
        "DirectorFilter"
    }

    fn matches(&self, film: &Film, selection: &ActiveSelection) -> bool {
        if selection.selected_directors.is_empty() {
            return true;
        }
        film.directors()
            .is_some_and(|directors| selection.selected_directors.contains(directors))
    }
}
