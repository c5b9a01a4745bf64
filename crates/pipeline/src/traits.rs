//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the film dataset.

use crate::selection::ActiveSelection;
use data_loader::Film;

/// A single inclusion condition over films.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters are predicates, so they cannot fail: any selection value is valid
/// - A filter whose dimension has nothing selected must match every film
/// - `Send + Sync` allows a pipeline to be shared across threads
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `film` passes this condition under `selection`
    fn matches(&self, film: &Film, selection: &ActiveSelection) -> bool;

    /// Keep the films that pass, preserving their order
    fn apply<'a>(&self, films: Vec<&'a Film>, selection: &ActiveSelection) -> Vec<&'a Film> {
        films
            .into_iter()
            .filter(|film| self.matches(film, selection))
            .collect()
    }
}
