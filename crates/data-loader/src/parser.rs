//! Parsing for the film dataset.
//!
//! Two concerns live here:
//! - decoding the JSON document into `Film` records
//! - turning box-office currency text into a number
//!
//! Box-office parsing is deliberately kept in a single function so that the
//! sort order and the statistics can never disagree on what a value is worth.

use crate::error::Result;
use crate::types::Film;
use std::io::Read;

/// Parse a JSON document into films, keeping document order.
///
/// The document must be an array of objects with at least `title`,
/// `release_year`, `box_office` and `film_url`. Unknown fields are ignored.
pub fn parse_films(json: &str) -> Result<Vec<Film>> {
    let films: Vec<Film> = serde_json::from_str(json)?;
    Ok(films)
}

/// Same as [`parse_films`], reading from any byte source
pub fn parse_films_reader<R: Read>(reader: R) -> Result<Vec<Film>> {
    let films: Vec<Film> = serde_json::from_reader(reader)?;
    Ok(films)
}

/// Numeric value of a box-office string.
///
/// `$` and `,` are stripped, surrounding whitespace is ignored, and the
/// longest leading decimal number is read (`"$1,234.50"` -> `1234.5`,
/// `"$12 million"` -> `12.0`). When no number can be read the value is
/// `0.0`. The result is always finite.
pub fn parse_box_office(raw: &str) -> f64 {
    try_parse_box_office(raw).unwrap_or(0.0)
}

/// Like [`parse_box_office`] but reports failure instead of falling back.
///
/// Only used for load diagnostics; ordering and statistics go through
/// [`parse_box_office`].
pub fn try_parse_box_office(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let trimmed = cleaned.trim();

    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return None;
    }

    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length in bytes of the leading `[+-]digits[.digits][e[+-]digits]` run,
/// or 0 when the mantissa holds no digit at all. A dangling exponent marker
/// is left out of the run.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut idx = 0;
    let mut digits = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
        digits += 1;
    }
    if idx < bytes.len() && bytes[idx] == b'.' {
        idx += 1;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
            digits += 1;
        }
    }

    if digits == 0 {
        return 0;
    }

    if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        let mut exp = idx + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if exp_digits > 0 {
            idx = exp + exp_digits;
        }
    }

    idx
}
