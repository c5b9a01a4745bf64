//! Ordering of the filtered films.
//!
//! All sorts are stable, so films that compare equal keep their dataset
//! order, and `SortKey::Original` is simply "do nothing".

use crate::selection::SortKey;
use data_loader::Film;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort films in place by `key`.
pub fn sort_films(films: &mut Vec<&Film>, key: SortKey) {
    match key {
        SortKey::BoxOfficeDesc => sort_by_box_office(films, |a, b| b.total_cmp(&a)),
        SortKey::BoxOfficeAsc => sort_by_box_office(films, |a, b| a.total_cmp(&b)),
        SortKey::YearDesc => films.sort_by(|a, b| b.release_year.cmp(&a.release_year)),
        SortKey::YearAsc => films.sort_by(|a, b| a.release_year.cmp(&b.release_year)),
        SortKey::Title => films.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::Original => {}
    }
}

/// Parse each box office once, sort on the parsed value, then drop it.
///
/// Parsed values are always finite, so `total_cmp` orders them exactly as
/// numeric comparison would.
fn sort_by_box_office(films: &mut Vec<&Film>, cmp: impl Fn(f64, f64) -> Ordering) {
    let mut keyed: Vec<(f64, &Film)> = films
        .iter()
        .map(|film| (film.box_office_value(), *film))
        .collect();
    keyed.sort_by(|a, b| cmp(a.0, b.0));

    films.clear();
    films.extend(keyed.into_iter().map(|(_, film)| film));
}

/// Locale-style title comparison.
///
/// Compares in three passes, each only breaking ties left by the previous:
/// base letters with case and accents ignored (`"Élan" < "Zootopia"`),
/// then accents (`"Elan" < "Élan"`), then case with lowercase first
/// (`"alpha" < "Alpha"`). Anything still tied falls back to code point order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Lowercased, decomposed, combining marks dropped
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased and decomposed, combining marks kept
fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
