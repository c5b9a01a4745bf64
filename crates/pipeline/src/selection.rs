//! Active selection: the mutable half of a browsing session.
//!
//! Holds the query text, the selected facet values and the sort key. Every
//! user intent mutates exactly this struct; everything visible is derived
//! from it and the immutable dataset.

use data_loader::Year;
use std::collections::BTreeSet;
use std::fmt;

/// Ordering applied to the filtered films.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Numeric box office, highest first
    #[default]
    BoxOfficeDesc,
    /// Numeric box office, lowest first
    BoxOfficeAsc,
    /// Most recent first
    YearDesc,
    /// Oldest first
    YearAsc,
    /// Title, locale-aware ascending
    Title,
    /// Dataset order; what any unrecognized key falls back to
    Original,
}

impl SortKey {
    /// The five named orderings offered to users
    pub const ALL: [SortKey; 5] = [
        SortKey::BoxOfficeDesc,
        SortKey::BoxOfficeAsc,
        SortKey::YearDesc,
        SortKey::YearAsc,
        SortKey::Title,
    ];

    /// Parse a sort key name. Never fails: unknown names keep dataset order.
    ///
    /// `boxOffice` is accepted as an alias of `boxOfficeDesc`.
    pub fn parse(key: &str) -> Self {
        match key.trim() {
            "boxOfficeDesc" | "boxOffice" => SortKey::BoxOfficeDesc,
            "boxOfficeAsc" => SortKey::BoxOfficeAsc,
            "yearDesc" => SortKey::YearDesc,
            "yearAsc" => SortKey::YearAsc,
            "title" => SortKey::Title,
            _ => SortKey::Original,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::BoxOfficeDesc => "boxOfficeDesc",
            SortKey::BoxOfficeAsc => "boxOfficeAsc",
            SortKey::YearDesc => "yearDesc",
            SortKey::YearAsc => "yearAsc",
            SortKey::Title => "title",
            SortKey::Original => "original",
        }
    }

    /// Human label, as shown in a sort selector
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::BoxOfficeDesc => "Box Office (High to Low)",
            SortKey::BoxOfficeAsc => "Box Office (Low to High)",
            SortKey::YearDesc => "Year (Newest First)",
            SortKey::YearAsc => "Year (Oldest First)",
            SortKey::Title => "Title (A-Z)",
            SortKey::Original => "Original Order",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facet dimension a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Year,
    Country,
    Director,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Year => "year",
            Dimension::Country => "country",
            Dimension::Director => "director",
        };
        f.write_str(name)
    }
}

/// A single facet value, tagged with its dimension.
///
/// Years stay numeric so toggling `2000` can never miss a film because of
/// string formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FacetValue {
    Year(Year),
    Country(String),
    Director(String),
}

impl FacetValue {
    pub fn dimension(&self) -> Dimension {
        match self {
            FacetValue::Year(_) => Dimension::Year,
            FacetValue::Country(_) => Dimension::Country,
            FacetValue::Director(_) => Dimension::Director,
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetValue::Year(year) => write!(f, "{}", year),
            FacetValue::Country(country) => f.write_str(country),
            FacetValue::Director(director) => f.write_str(director),
        }
    }
}

/// Query, facet selections and sort key of a session.
///
/// An empty set for a dimension means "no restriction" for that dimension,
/// never "match nothing".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveSelection {
    pub query: String,
    pub selected_years: BTreeSet<Year>,
    pub selected_countries: BTreeSet<String>,
    pub selected_directors: BTreeSet<String>,
    pub sort_key: SortKey,
}

impl ActiveSelection {
    /// Default selection: no query, nothing selected, box office descending
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Select a facet value (builder form; selecting twice is a no-op)
    pub fn with_facet(mut self, value: FacetValue) -> Self {
        if !self.is_selected(&value) {
            self.toggle(value);
        }
        self
    }

    /// Flip a facet value in or out of its dimension's set.
    ///
    /// Returns `true` when the value is selected afterwards.
    pub fn toggle(&mut self, value: FacetValue) -> bool {
        fn flip<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
            if set.remove(&value) {
                false
            } else {
                set.insert(value);
                true
            }
        }

        match value {
            FacetValue::Year(year) => flip(&mut self.selected_years, year),
            FacetValue::Country(country) => flip(&mut self.selected_countries, country),
            FacetValue::Director(director) => flip(&mut self.selected_directors, director),
        }
    }

    pub fn is_selected(&self, value: &FacetValue) -> bool {
        match value {
            FacetValue::Year(year) => self.selected_years.contains(year),
            FacetValue::Country(country) => self.selected_countries.contains(country),
            FacetValue::Director(director) => self.selected_directors.contains(director),
        }
    }

    /// True when no filter restricts the dataset (sort key aside)
    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty()
            && self.selected_years.is_empty()
            && self.selected_countries.is_empty()
            && self.selected_directors.is_empty()
    }

    /// Clear every selection and the query, and restore the default sort
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("boxOfficeDesc"), SortKey::BoxOfficeDesc);
        assert_eq!(SortKey::parse("boxOffice"), SortKey::BoxOfficeDesc);
        assert_eq!(SortKey::parse("boxOfficeAsc"), SortKey::BoxOfficeAsc);
        assert_eq!(SortKey::parse("yearDesc"), SortKey::YearDesc);
        assert_eq!(SortKey::parse("yearAsc"), SortKey::YearAsc);
        assert_eq!(SortKey::parse("title"), SortKey::Title);
        assert_eq!(SortKey::parse("rating"), SortKey::Original);
        assert_eq!(SortKey::parse(""), SortKey::Original);
    }

    #[test]
    fn test_sort_key_names_roundtrip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::default(), SortKey::BoxOfficeDesc);
    }

    #[test]
    fn test_toggle() {
        let mut selection = ActiveSelection::new();

        assert!(selection.toggle(FacetValue::Year(2000)));
        assert!(selection.is_selected(&FacetValue::Year(2000)));
        assert!(!selection.toggle(FacetValue::Year(2000)));
        assert!(selection.selected_years.is_empty());

        selection.toggle(FacetValue::Country("US".to_string()));
        selection.toggle(FacetValue::Director("Fritz Lang".to_string()));
        assert!(selection.selected_countries.contains("US"));
        assert!(selection.selected_directors.contains("Fritz Lang"));
        assert!(!selection.is_unrestricted());
    }

    #[test]
    fn test_reset() {
        let mut selection = ActiveSelection::new()
            .with_query("lang")
            .with_sort(SortKey::Title)
            .with_facet(FacetValue::Year(1927))
            .with_facet(FacetValue::Country("Germany".to_string()));

        selection.reset();

        assert_eq!(selection, ActiveSelection::default());
        assert!(selection.is_unrestricted());
        assert_eq!(selection.sort_key, SortKey::BoxOfficeDesc);
    }

    #[test]
    fn test_with_facet_is_idempotent() {
        let selection = ActiveSelection::new()
            .with_facet(FacetValue::Year(2000))
            .with_facet(FacetValue::Year(2000));
        assert!(selection.is_selected(&FacetValue::Year(2000)));
    }
}
