//! Band dataset model and JSON parsing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, RockrError};

/// One band record from the input dataset.
///
/// Immutable once parsed; a band has no identity beyond its position in
/// the input collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Band name.
    pub name: String,
    /// Genre label.
    pub genre: String,
    /// Number of released albums.
    pub albums: u32,
    /// Rating on a 0–10 scale.
    pub rating: f64,
}

/// The parsed input collection, ordered as found in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandDataset {
    /// Bands under the `bands` key of the input document.
    pub bands: Vec<Band>,
}

/// Parse raw JSON into a dataset.
///
/// The accepted shape is the `{"bands": [...]}` object form; a top-level
/// array or missing fields surface as [`RockrError::MalformedInput`] with
/// the offending path.
pub fn parse_dataset(path: &Path, raw: &str) -> Result<BandDataset> {
    serde_json::from_str(raw).map_err(|e| RockrError::MalformedInput {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

/// Read and parse the dataset file at `path`.
pub fn load_dataset(path: &Path) -> Result<BandDataset> {
    let raw = fs::read_to_string(path).map_err(|source| RockrError::io(path, source))?;
    parse_dataset(path, &raw)
}
