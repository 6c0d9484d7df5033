//! Raw CORPUS dataset records and the bundled-file loader.
//!
//! The corpus is the rail industry's location reference extract: one
//! record per location, public or not. Records are decoded verbatim;
//! deciding which ones are publishable is the filter pipeline's job.

use std::path::Path;

use serde::Deserialize;

use super::error::CatalogError;

/// One raw record from the CORPUS extract, exactly as shipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorpusRecord {
    /// National Location Code.
    #[serde(rename = "NLC")]
    pub nlc: i64,

    /// Station number (TOPS location code).
    #[serde(rename = "STANOX")]
    pub stanox: String,

    /// Timing point location code.
    #[serde(rename = "TIPLOC")]
    pub tiploc: String,

    /// Three-letter alpha code; blank for locations without one.
    #[serde(rename = "3ALPHA")]
    pub alpha: String,

    /// UIC code.
    #[serde(rename = "UIC")]
    pub uic: String,

    /// Full location description.
    #[serde(rename = "NLCDESC")]
    pub description: String,

    /// Sixteen-character short description.
    #[serde(rename = "NLCDESC16")]
    pub short_description: String,
}

/// Top-level shape of the extract: a single `CORPUS` array.
#[derive(Debug, Deserialize)]
struct CorpusDataset {
    #[serde(rename = "CORPUS")]
    corpus: Vec<CorpusRecord>,
}

/// Load and decode the bundled corpus extract.
///
/// A missing file is `ResourceNotFound`; content that is not JSON, or
/// is JSON of the wrong shape, is `MalformedDataset`. No other
/// validation happens here.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<CorpusRecord>, CatalogError> {
    let path = path.as_ref();

    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::ResourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io(e)
        }
    })?;

    parse_corpus(&contents)
}

/// Decode corpus JSON text into raw records.
pub(crate) fn parse_corpus(contents: &str) -> Result<Vec<CorpusRecord>, CatalogError> {
    let dataset: CorpusDataset =
        serde_json::from_str(contents).map_err(|e| CatalogError::MalformedDataset {
            message: e.to_string(),
        })?;

    Ok(dataset.corpus)
}
