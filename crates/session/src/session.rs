//! # Browse Session
//!
//! This module coordinates a browsing session:
//! 1. Fetch the dataset (the only async step)
//! 2. Extract facets once
//! 3. For every intent: mutate the selection, recompute the visible films,
//!    aggregate statistics, re-render
//!
//! The session is the single owner of all session state; nothing lives in
//! globals, and the visible films are never stored, only recomputed.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use data_loader::{Dataset, Film, LoadError};
use pipeline::{aggregate, extract_facets, ActiveSelection, Facets, FilterPipeline, Stats};

use crate::fetch::fetch_dataset;
use crate::intent::Intent;
use crate::presenter::Presenter;

/// Owns the dataset, its facets and the active selection of one session
pub struct BrowseSession {
    dataset: Arc<Dataset>,
    facets: Facets,
    selection: ActiveSelection,
    pipeline: FilterPipeline,
}

impl BrowseSession {
    /// Start a session over an already-loaded dataset
    pub fn new(dataset: Dataset) -> Self {
        Self::from_shared(Arc::new(dataset))
    }

    /// Start a session over a dataset shared with other owners
    pub fn from_shared(dataset: Arc<Dataset>) -> Self {
        let facets = extract_facets(&dataset);
        Self {
            dataset,
            facets,
            selection: ActiveSelection::new(),
            pipeline: FilterPipeline::standard(),
        }
    }

    /// Fetch the dataset and perform the first render.
    ///
    /// On failure the error is rendered through `presenter` (instead of any
    /// film list) and returned; no partial data is shown.
    pub async fn launch<P: Presenter>(
        path: impl Into<PathBuf>,
        presenter: &mut P,
    ) -> Result<Self, LoadError> {
        let session = Self::open(path, presenter).await?;
        session.render(presenter);
        Ok(session)
    }

    /// Fetch the dataset without rendering it.
    ///
    /// Failures are rendered and returned exactly as in [`launch`](Self::launch),
    /// so callers that adjust the selection before the first render share
    /// the same error path.
    pub async fn open<P: Presenter>(
        path: impl Into<PathBuf>,
        presenter: &mut P,
    ) -> Result<Self, LoadError> {
        let start_time = Instant::now();

        let dataset = match fetch_dataset(path).await {
            Ok(dataset) => dataset,
            Err(err) => {
                warn!("Dataset load failed: {}", err);
                presenter.render_error(&err);
                return Err(err);
            }
        };

        let session = Self::new(dataset);
        info!(
            "Session ready with {} films in {:?}",
            session.dataset.len(),
            start_time.elapsed()
        );
        Ok(session)
    }

    /// Replace the whole selection without rendering
    pub fn select(&mut self, selection: ActiveSelection) {
        debug!("Selection replaced: {:?}", selection);
        self.selection = selection;
    }

    /// Run one intent cycle: mutate, recompute, aggregate, render.
    pub fn dispatch<P: Presenter>(&mut self, intent: Intent, presenter: &mut P) {
        debug!("Dispatching intent: {:?}", intent);
        self.apply(intent);
        self.render(presenter);
    }

    /// Mutate the selection without rendering
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::QueryChange(query) => self.selection.query = query,
            Intent::SortChange(sort_key) => self.selection.sort_key = sort_key,
            Intent::FacetToggle(value) => {
                let selected = self.selection.toggle(value.clone());
                debug!(
                    "{} {} {}",
                    if selected { "Selected" } else { "Cleared" },
                    value.dimension(),
                    value
                );
            }
            Intent::Reset => self.selection.reset(),
        }
    }

    /// Render list, facets and stats for the current selection
    pub fn render<P: Presenter>(&self, presenter: &mut P) {
        let visible = self.visible();
        let stats = aggregate(&visible);

        presenter.render_list(&visible);
        presenter.render_facets(&self.facets, &self.selection);
        presenter.render_stats(&stats);
    }

    /// Films visible under the current selection, in display order
    pub fn visible(&self) -> Vec<&Film> {
        self.pipeline.compute(&self.dataset, &self.selection)
    }

    pub fn stats(&self) -> Stats {
        aggregate(&self.visible())
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }
}
