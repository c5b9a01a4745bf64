//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, then orders the
//! survivors by the selection's sort key.

use crate::filters::{CountryFilter, DirectorFilter, SearchFilter, YearFilter};
use crate::selection::ActiveSelection;
use crate::sort::sort_films;
use crate::traits::Filter;
use data_loader::{Dataset, Film};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter)
///     .add_filter(YearFilter);
///
/// let visible = pipeline.compute(&dataset, &selection);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline every browsing session uses: search, year, country and
    /// director, all combined with AND.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchFilter)
            .add_filter(YearFilter)
            .add_filter(CountryFilter)
            .add_filter(DirectorFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence, keeping the input order.
    pub fn apply<'a>(&self, films: Vec<&'a Film>, selection: &ActiveSelection) -> Vec<&'a Film> {
        let mut current = films;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, selection);
            tracing::debug!(
                "Applied filter: {} ({} -> {})",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }

    /// Filter the full dataset, then sort by the selection's sort key.
    ///
    /// A pure function of its inputs: the result only borrows from `dataset`
    /// and the same selection always yields the same sequence.
    pub fn compute<'a>(&self, dataset: &'a Dataset, selection: &ActiveSelection) -> Vec<&'a Film> {
        let mut visible = self.apply(dataset.iter().collect(), selection);
        sort_films(&mut visible, selection.sort_key);
        tracing::debug!(
            "Computed visible subset: {} of {} films, sorted by {}",
            visible.len(),
            dataset.len(),
            selection.sort_key
        );
        visible
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{FacetValue, SortKey};
    use crate::test_support::film_in;

    fn dataset() -> Dataset {
        Dataset::from_films(vec![
            film_in("A", 2000, "$1,000", Some("US")),
            film_in("B", 2010, "$2,000", Some("UK")),
        ])
    }

    #[test]
    fn test_empty_pipeline() {
        let dataset = dataset();
        let pipeline = FilterPipeline::new();
        let selection = ActiveSelection::new().with_query("zzz").with_sort(SortKey::Original);

        let visible = pipeline.compute(&dataset, &selection);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let dataset = dataset();
        let pipeline = FilterPipeline::new().add_filter(CountryFilter);
        let selection = ActiveSelection::new().with_facet(FacetValue::Country("US".to_string()));

        let visible = pipeline.compute(&dataset, &selection);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "A");
    }

    #[test]
    fn test_standard_pipeline_order() {
        let pipeline = FilterPipeline::standard();
        assert_eq!(
            pipeline.filter_names(),
            vec!["SearchFilter", "YearFilter", "CountryFilter", "DirectorFilter"]
        );
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let dataset = dataset();
        let selection = ActiveSelection::new()
            .with_facet(FacetValue::Country("US".to_string()))
            .with_facet(FacetValue::Year(2010));

        let visible = FilterPipeline::standard().compute(&dataset, &selection);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_compute_borrows_from_dataset() {
        let dataset = dataset();
        let visible = FilterPipeline::standard().compute(&dataset, &ActiveSelection::new());
        for film in visible {
            assert!(dataset.iter().any(|f| std::ptr::eq(f, film)));
        }
    }
}
