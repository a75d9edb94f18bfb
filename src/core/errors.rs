//! RKR-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, RockrError>;

/// Top-level error type for Rock Report.
///
/// Every failure is terminal for the single-shot process: nothing is
/// retried, and either the full report is written or nothing is.
#[derive(Debug, Error)]
pub enum RockrError {
    #[error("[RKR-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[RKR-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[RKR-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[RKR-2001] no dataset found under {root} ({probed} locations probed)")]
    DataNotFound { root: PathBuf, probed: usize },

    #[error("[RKR-2002] malformed dataset at {path}: {details}")]
    MalformedInput { path: PathBuf, details: String },

    #[error("[RKR-2003] no bands with rating >= {threshold} in the dataset")]
    NoQualifyingRecords { threshold: f64 },

    #[error("[RKR-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[RKR-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RockrError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "RKR-1001",
            Self::MissingConfig { .. } => "RKR-1002",
            Self::ConfigParse { .. } => "RKR-1003",
            Self::DataNotFound { .. } => "RKR-2001",
            Self::MalformedInput { .. } => "RKR-2002",
            Self::NoQualifyingRecords { .. } => "RKR-2003",
            Self::Serialization { .. } => "RKR-2101",
            Self::Io { .. } => "RKR-3002",
        }
    }

    /// Whether the failure stems from the environment rather than the input.
    ///
    /// A rerun of the same job may succeed for these; the dataset-shaped
    /// failures are deterministic and will fail again.
    #[must_use]
    pub const fn is_environmental(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::DataNotFound { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for RockrError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for RockrError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
