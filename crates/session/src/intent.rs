//! User intents: the only way a session's selection changes.

use pipeline::{FacetValue, SortKey};
use std::str::FromStr;
use thiserror::Error;

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the search text (empty clears it)
    QueryChange(String),
    SortChange(SortKey),
    /// Select the value if unselected, unselect it otherwise
    FacetToggle(FacetValue),
    /// Clear query and facets, restore the default sort
    Reset,
}

/// Why a line of text is not an intent
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntentParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unknown facet dimension: {0} (expected year, country or director)")]
    UnknownDimension(String),

    #[error("invalid year: {0}")]
    InvalidYear(String),
}

/// Text form used by the interactive front end:
///
/// ```text
/// search <text>          search            (clears the query)
/// sort <key>
/// toggle year <n>        toggle country <name>        toggle director <name>
/// reset
/// ```
impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(IntentParseError::Empty);
        }

        let (command, rest) = split_word(line);
        match command {
            "search" => Ok(Intent::QueryChange(rest.to_string())),
            "sort" => {
                if rest.is_empty() {
                    return Err(IntentParseError::MissingArgument("sort key"));
                }
                Ok(Intent::SortChange(SortKey::parse(rest)))
            }
            "toggle" => parse_toggle(rest).map(Intent::FacetToggle),
            "reset" => Ok(Intent::Reset),
            other => Err(IntentParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_toggle(args: &str) -> Result<FacetValue, IntentParseError> {
    let (dimension, value) = split_word(args);
    if dimension.is_empty() {
        return Err(IntentParseError::MissingArgument("facet dimension"));
    }
    if value.is_empty() {
        return Err(IntentParseError::MissingArgument("facet value"));
    }

    match dimension {
        "year" => value
            .parse()
            .map(FacetValue::Year)
            .map_err(|_| IntentParseError::InvalidYear(value.to_string())),
        "country" => Ok(FacetValue::Country(value.to_string())),
        "director" => Ok(FacetValue::Director(value.to_string())),
        other => Err(IntentParseError::UnknownDimension(other.to_string())),
    }
}

/// First whitespace-delimited word and the trimmed remainder
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}
