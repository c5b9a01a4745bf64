//! # Data Loader Crate
//!
//! This crate loads the static film dataset that a browsing session works on.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Film, Dataset)
//! - **parser**: JSON decoding and box-office currency parsing
//! - **loader**: Entry points that build a Dataset from a file, string or reader
//! - **error**: The LoadError type
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_file(Path::new("films_data.json"))?;
//! for film in &dataset {
//!     println!("{} ({}) {}", film.title, film.release_year, film.box_office);
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use parser::{parse_box_office, try_parse_box_office};
pub use types::{Dataset, Film, Year};
