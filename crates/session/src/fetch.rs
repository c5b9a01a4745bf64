//! Asynchronous dataset fetch.
//!
//! This is the only suspension point of a session: everything after the
//! dataset arrives runs synchronously to completion.

use data_loader::{Dataset, LoadError};
use std::path::PathBuf;
use tracing::info;

/// Read and parse the dataset without blocking the async runtime.
///
/// File I/O and JSON decoding run together on Tokio's blocking pool. There
/// is no timeout, retry or cancellation; the fetch either yields the
/// complete dataset or a [`LoadError`].
pub async fn fetch_dataset(path: impl Into<PathBuf>) -> Result<Dataset, LoadError> {
    let path = path.into();
    info!("Fetching dataset from {}", path.display());

    tokio::task::spawn_blocking(move || Dataset::load_from_file(&path))
        .await
        .map_err(|err| LoadError::FetchInterrupted(err.to_string()))?
}
