//! Station catalog: bundled corpus ingestion and filtering.
//!
//! Loads the CORPUS extract once at startup, keeps the public subset,
//! and hands out the sorted list for the picker and the `/stations`
//! feed. The catalog never changes after load, so it is shared behind
//! an `Arc` with no locking.

mod corpus;
mod error;
mod filter;

pub use corpus::{CorpusRecord, load_corpus};
pub use error::CatalogError;
pub use filter::{
    DESCRIPTION_DENYLIST, InclusionRule, PUBLIC_STATION_RULES, excluded_by, is_public,
    public_stations,
};

use std::path::Path;

use tracing::debug;

use crate::domain::Station;

/// The full filtered station list, loaded once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Load the catalog from a corpus extract on disk.
    ///
    /// Fails with `ResourceNotFound` or `MalformedDataset`; both are
    /// fatal to startup, so callers should refuse to serve on error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let records = load_corpus(path)?;
        let catalog = Self::from_records(&records);

        debug!(
            raw = records.len(),
            public = catalog.len(),
            "filtered station corpus"
        );

        Ok(catalog)
    }

    /// Build a catalog from already-decoded records.
    pub fn from_records(records: &[CorpusRecord]) -> Self {
        Self {
            stations: public_stations(records),
        }
    }

    /// The public stations, sorted by name case-insensitively.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of public stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the catalog holds no stations at all.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
