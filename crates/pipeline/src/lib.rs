//! Pipeline for filtering, sorting and summarizing the film dataset.
//!
//! This crate provides:
//! - ActiveSelection, the query / facet / sort state of a session
//! - Filter trait and implementations for each inclusion condition
//! - FilterPipeline for composing filters and ordering the result
//! - Facet extraction and summary statistics
//!
//! ## Architecture
//! The pipeline recomputes from scratch on every selection change:
//! 1. Filters keep the films matching the selection (AND across filters)
//! 2. The survivors are sorted by the selection's sort key
//! 3. Statistics are aggregated over the sorted, visible films
//!
//! Facets are derived once from the full dataset and never recomputed.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{aggregate, compute, extract_facets, ActiveSelection, SortKey};
//!
//! let facets = extract_facets(&dataset);
//! let selection = ActiveSelection::new().with_query("lang").with_sort(SortKey::YearAsc);
//!
//! let visible = compute(&dataset, &selection);
//! let stats = aggregate(&visible);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod selection;
pub mod sort;
pub mod facets;
pub mod stats;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use selection::{ActiveSelection, Dimension, FacetValue, SortKey};
pub use sort::{compare_titles, sort_films};
pub use facets::{extract_facets, FacetEntry, Facets};
pub use stats::{aggregate, format_currency, Stats, NOT_AVAILABLE};

use data_loader::{Dataset, Film};

/// Visible films for a selection, using the standard pipeline.
///
/// Deterministic and side-effect free; the result borrows from `dataset`.
pub fn compute<'a>(dataset: &'a Dataset, selection: &ActiveSelection) -> Vec<&'a Film> {
    FilterPipeline::standard().compute(dataset, selection)
}
