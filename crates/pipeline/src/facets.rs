//! Facet extraction.
//!
//! Facets are the distinct filterable values of the dataset together with
//! how many films carry each one. Counts are taken over the full dataset,
//! so they are computed once at load and never change while filters move.

use crate::selection::FacetValue;
use data_loader::{Dataset, Film, Year};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// One selectable value and the number of films in the dataset that have it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetEntry<T> {
    pub value: T,
    pub count: usize,
}

/// All facet entries of a dataset, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    /// Most recent first
    pub years: Vec<FacetEntry<Year>>,
    /// Ascending
    pub countries: Vec<FacetEntry<String>>,
    /// Ascending; multi-director strings are single entries
    pub directors: Vec<FacetEntry<String>>,
}

impl Facets {
    /// Number of films in the dataset with this facet value (0 if none)
    pub fn count_for(&self, value: &FacetValue) -> usize {
        fn lookup<T: PartialEq>(entries: &[FacetEntry<T>], value: &T) -> usize {
            entries
                .iter()
                .find(|entry| &entry.value == value)
                .map(|entry| entry.count)
                .unwrap_or(0)
        }

        match value {
            FacetValue::Year(year) => lookup(&self.years, year),
            FacetValue::Country(country) => lookup(&self.countries, country),
            FacetValue::Director(director) => lookup(&self.directors, director),
        }
    }

    /// Every entry as a tagged value with its count, years first
    pub fn entries(&self) -> impl Iterator<Item = (FacetValue, usize)> + '_ {
        let years = self
            .years
            .iter()
            .map(|e| (FacetValue::Year(e.value), e.count));
        let countries = self
            .countries
            .iter()
            .map(|e| (FacetValue::Country(e.value.clone()), e.count));
        let directors = self
            .directors
            .iter()
            .map(|e| (FacetValue::Director(e.value.clone()), e.count));
        years.chain(countries).chain(directors)
    }
}

/// Derive the facet entries of a dataset.
///
/// The three dimensions are independent, so they are counted in parallel
/// with Rayon's `join`.
pub fn extract_facets(dataset: &Dataset) -> Facets {
    let films = dataset.films();

    let (years, (countries, directors)) = rayon::join(
        || year_facets(films),
        || {
            rayon::join(
                || text_facets(films, Film::country),
                || text_facets(films, Film::directors),
            )
        },
    );

    debug!(
        "Extracted facets: {} years, {} countries, {} directors",
        years.len(),
        countries.len(),
        directors.len()
    );

    Facets {
        years,
        countries,
        directors,
    }
}

fn year_facets(films: &[Film]) -> Vec<FacetEntry<Year>> {
    let mut counts: HashMap<Year, usize> = HashMap::new();
    for film in films {
        *counts.entry(film.release_year).or_insert(0) += 1;
    }

    let mut entries: Vec<FacetEntry<Year>> = counts
        .into_iter()
        .map(|(value, count)| FacetEntry { value, count })
        .collect();
    entries.sort_by_key(|entry| Reverse(entry.value));
    entries
}

/// Count a text dimension; films where `field` is absent or empty are skipped.
fn text_facets(films: &[Film], field: fn(&Film) -> Option<&str>) -> Vec<FacetEntry<String>> {
    // BTreeMap keeps the keys in ascending order for free
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in films.iter().filter_map(field) {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(value, count)| FacetEntry {
            value: value.to_string(),
            count,
        })
        .collect()
}
