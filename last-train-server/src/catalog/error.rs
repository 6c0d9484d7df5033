//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur while loading the station corpus.
///
/// Both dataset errors are fatal at startup: the process must refuse to
/// serve traffic rather than silently publish an empty catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The bundled dataset file is missing.
    #[error("station corpus not found at {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// The dataset file exists but does not decode into the expected
    /// shape (a `CORPUS` array of seven-field records).
    #[error("station corpus is malformed: {message}")]
    MalformedDataset { message: String },

    /// Reading the dataset file failed for a reason other than absence.
    #[error("failed to read station corpus: {0}")]
    Io(#[from] std::io::Error),
}
