//! Session crate for the film browser.
//!
//! A browsing session owns the loaded dataset, its facets and the active
//! selection, and drives one cycle per user intent:
//! mutate selection -> recompute visible films -> aggregate -> render.
//!
//! Rendering goes through the [`Presenter`] trait, so any front end (the
//! terminal one in the `cli` crate, or a test double) can plug in.

pub mod fetch;
pub mod intent;
pub mod presenter;
pub mod session;

pub use fetch::fetch_dataset;
pub use intent::{Intent, IntentParseError};
pub use presenter::Presenter;
pub use session::BrowseSession;
