//! Dataset loading entry points.
//!
//! Every path ends in [`Dataset::from_films`] followed by a diagnostics pass
//! that logs what was loaded. Loading either succeeds with the complete
//! document or fails with a [`LoadError`]; there is no partial result.

use crate::error::{LoadError, Result};
use crate::parser;
use crate::types::{Dataset, Film};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

impl Dataset {
    /// Load the dataset from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading film dataset from {:?}", path);

        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LoadError::Io(err),
        })?;

        Self::from_reader(BufReader::new(file))
    }

    /// Build the dataset from an in-memory JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let films = parser::parse_films(json)?;
        Ok(Self::loaded(films))
    }

    /// Build the dataset from any reader yielding a JSON document
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let films = parser::parse_films_reader(reader)?;
        Ok(Self::loaded(films))
    }

    /// Build the dataset from raw bytes, e.g. the result of an async read
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let films: Vec<Film> = serde_json::from_slice(bytes)?;
        Ok(Self::loaded(films))
    }

    fn loaded(films: Vec<Film>) -> Self {
        let dataset = Self::from_films(films);
        dataset.log_summary();
        dataset
    }

    /// Number of films whose box office text does not parse.
    ///
    /// Those films still load; they count as zero in ordering and averages.
    pub fn unparseable_box_office_count(&self) -> usize {
        self.films
            .iter()
            .filter(|film| parser::try_parse_box_office(&film.box_office).is_none())
            .count()
    }

    fn log_summary(&self) {
        info!("Loaded {} films", self.len());

        let unparseable = self.unparseable_box_office_count();
        if unparseable > 0 {
            warn!(
                "{} films have an unparseable box office value and will count as $0",
                unparseable
            );
        }
    }
}
