//! Summary statistics over the visible films.
//!
//! Averages use the same box-office parsing as sorting: a film whose value
//! does not parse adds zero to the sum but still counts in the denominator.

use data_loader::{Film, Year};
use num_format::{Locale, ToFormattedString};
use std::fmt;

/// Display value for statistics that are undefined on an empty set
pub const NOT_AVAILABLE: &str = "N/A";

/// Aggregates of a visible subset.
///
/// The optional fields are `None` exactly when `count` is 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub count: usize,
    pub average_box_office: Option<f64>,
    pub min_year: Option<Year>,
    pub max_year: Option<Year>,
}

impl Stats {
    /// Average box office as whole-dollar currency, or `N/A`
    pub fn average_display(&self) -> String {
        self.average_box_office
            .map(format_currency)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// `"1927 - 1996"`, or `N/A`
    pub fn year_range_display(&self) -> String {
        match (self.min_year, self.max_year) {
            (Some(min), Some(max)) => format!("{} - {}", min, max),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} films | avg box office {} | years {}",
            self.count,
            self.average_display(),
            self.year_range_display()
        )
    }
}

/// Compute statistics over the visible films
pub fn aggregate(films: &[&Film]) -> Stats {
    if films.is_empty() {
        return Stats::default();
    }

    let count = films.len();
    let total: f64 = films.iter().map(|film| film.box_office_value()).sum();
    let min_year = films.iter().map(|film| film.release_year).min();
    let max_year = films.iter().map(|film| film.release_year).max();

    Stats {
        count,
        average_box_office: Some(total / count as f64),
        min_year,
        max_year,
    }
}

/// Format an amount as US dollars with no decimal places, e.g. `$1,234,568`.
///
/// Rounds half away from zero. Non-finite input renders as `N/A`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    // `as` saturates, which is fine far beyond any real box office
    let dollars = rounded.abs() as u64;

    format!("{}${}", sign, dollars.to_formatted_string(&Locale::en))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::film;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1_234_567.5), "$1,234,568");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-5.0), "-$5");
        assert_eq!(format_currency(f64::NAN), NOT_AVAILABLE);
    }

    #[test]
    fn test_aggregate() {
        let films = [
            film("A", 2000, "$1,000"),
            film("B", 2010, "$2,000"),
            film("C", 1995, "$3,000"),
        ];
        let refs: Vec<&Film> = films.iter().collect();

        let stats = aggregate(&refs);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.average_box_office, Some(2000.0));
        assert_eq!(stats.min_year, Some(1995));
        assert_eq!(stats.max_year, Some(2010));
        assert_eq!(stats.average_display(), "$2,000");
        assert_eq!(stats.year_range_display(), "1995 - 2010");
    }

    #[test]
    fn test_unparseable_counts_in_denominator() {
        let films = [film("A", 2000, "$3,000"), film("B", 2000, "unknown")];
        let refs: Vec<&Film> = films.iter().collect();

        let stats = aggregate(&refs);
        assert_eq!(stats.average_box_office, Some(1500.0));
    }

    #[test]
    fn test_empty_subset() {
        let stats = aggregate(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_box_office, None);
        assert_eq!(stats.min_year, None);
        assert_eq!(stats.max_year, None);
        assert_eq!(stats.average_display(), "N/A");
        assert_eq!(stats.year_range_display(), "N/A");
        assert_eq!(stats.to_string(), "0 films | avg box office N/A | years N/A");
    }
}
