//! Filter implementations for the film pipeline.
//!
//! One filter per inclusion condition. A film is visible only when every
//! filter in the pipeline matches it; inside a facet filter, the selected
//! values combine as a membership test.

pub mod search;
pub mod year;
pub mod country;
pub mod director;

// Re-export for convenience
pub use country::CountryFilter;
pub use director::DirectorFilter;
pub use search::SearchFilter;
pub use year::YearFilter;
