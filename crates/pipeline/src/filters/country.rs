//! Country facet filter.

use crate::selection::ActiveSelection;
use crate::traits::Filter;
use data_loader::Film;

/// Keeps films whose country is one of the selected countries.
///
/// Once any country is selected, films without a country are excluded.
pub struct CountryFilter;

impl Filter for CountryFilter {
    fn name(&self) -> &str {
        "CountryFilter"
    }

    fn matches(&self, film: &Film, selection: &ActiveSelection) -> bool {
        if selection.selected_countries.is_empty() {
            return true;
        }
        film.country()
            .is_some_and(|country| selection.selected_countries.contains(country))
    }
}
