//! Release year facet filter.

use crate::selection::ActiveSelection;
use crate::traits::Filter;
use data_loader::Film;

/// Keeps films released in one of the selected years.
///
/// No selected year means no restriction.
pub struct YearFilter;

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn matches(&self, film: &Film, selection: &ActiveSelection) -> bool {
        selection.selected_years.is_empty() || selection.selected_years.contains(&film.release_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::FacetValue;
    use crate::test_support::film;

    #[test]
    fn test_year_filter() {
        let a = film("A", 2000, "$1");
        let b = film("B", 2010, "$1");

        let none = ActiveSelection::new();
        assert!(YearFilter.matches(&a, &none));
        assert!(YearFilter.matches(&b, &none));

        let both = ActiveSelection::new()
            .with_facet(FacetValue::Year(2000))
            .with_facet(FacetValue::Year(2010));
        assert!(YearFilter.matches(&a, &both));
        assert!(YearFilter.matches(&b, &both));

        let only_2010 = ActiveSelection::new().with_facet(FacetValue::Year(2010));
        assert!(!YearFilter.matches(&a, &only_2010));
        assert!(YearFilter.matches(&b, &only_2010));
    }
}
