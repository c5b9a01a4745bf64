//! The rendering seam between the session and a front end.

use data_loader::{Film, LoadError};
use pipeline::{ActiveSelection, Facets, Stats};

/// Turns session output into something a user can see.
///
/// The session calls these after every intent, always in the order
/// list, facets, stats. `render_error` is only ever called instead of
/// the other three, when the dataset failed to load.
pub trait Presenter {
    /// Show the visible films, in order
    fn render_list(&mut self, films: &[&Film]);

    /// Show the facet panel; `selection` says which entries are active
    fn render_facets(&mut self, facets: &Facets, selection: &ActiveSelection);

    fn render_stats(&mut self, stats: &Stats);

    /// Show a terminal load failure in place of the film list
    fn render_error(&mut self, error: &LoadError);
}
