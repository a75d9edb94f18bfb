//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, RockrError};

/// Full rockr configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub input: InputConfig,
    pub report: ReportConfig,
}

/// Dataset discovery settings.
///
/// `candidates` are probed relative to `mount_root`, in order. When
/// `scan_mount_dir` is set and no candidate matches, the first regular file
/// in the root directory (name-sorted) is used as a last resort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    pub mount_root: PathBuf,
    pub candidates: Vec<PathBuf>,
    pub scan_mount_dir: bool,
}

/// Report shaping and output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub prefix: String,
    pub output_dir: PathBuf,
    pub rating_threshold: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mount_root: PathBuf::from("/data/inputs"),
            candidates: vec![
                PathBuf::from("data.json"),
                PathBuf::from("0/data.json"),
                PathBuf::from("0/0"),
            ],
            scan_mount_dir: true,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            prefix: "rock-analysis".to_string(),
            output_dir: PathBuf::from("."),
            rating_threshold: 9.0,
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                eprintln!("[RKR-CONFIG] WARNING: HOME not set, falling back to /tmp");
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        home_dir.join(".config").join("rockr").join("config.toml")
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path;
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| RockrError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(RockrError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_env_overrides_from(env_var)
    }

    /// Apply overrides from an injectable lookup so tests don't have to
    /// mutate process-wide environment state.
    pub fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("ROCKR_INPUT_MOUNT_ROOT") {
            self.input.mount_root = PathBuf::from(raw);
        }

        if let Some(raw) = lookup("ROCKR_REPORT_PREFIX") {
            self.report.prefix = raw;
        }

        if let Some(raw) = lookup("ROCKR_REPORT_OUTPUT_DIR") {
            self.report.output_dir = PathBuf::from(raw);
        }

        if let Some(raw) = lookup("ROCKR_REPORT_RATING_THRESHOLD") {
            self.report.rating_threshold =
                raw.parse::<f64>().map_err(|error| RockrError::ConfigParse {
                    context: "env",
                    details: format!("ROCKR_REPORT_RATING_THRESHOLD={raw:?}: {error}"),
                })?;
        }

        Ok(())
    }

    /// Validate the effective configuration.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.report.rating_threshold;
        if !threshold.is_finite() || !(0.0..=10.0).contains(&threshold) {
            return Err(RockrError::InvalidConfig {
                details: format!("report.rating_threshold must be in [0, 10], got {threshold}"),
            });
        }

        if self.report.prefix.is_empty() {
            return Err(RockrError::InvalidConfig {
                details: "report.prefix must not be empty".to_string(),
            });
        }
        if self.report.prefix.contains(std::path::MAIN_SEPARATOR) || self.report.prefix.contains('/')
        {
            return Err(RockrError::InvalidConfig {
                details: format!(
                    "report.prefix must be a bare file-name stem, got {:?}",
                    self.report.prefix
                ),
            });
        }

        for candidate in &self.input.candidates {
            if candidate.is_absolute() {
                return Err(RockrError::InvalidConfig {
                    details: format!(
                        "input.candidates entries must be relative to mount_root, got {}",
                        candidate.display()
                    ),
                });
            }
        }

        if self.input.candidates.is_empty() && !self.input.scan_mount_dir {
            return Err(RockrError::InvalidConfig {
                details: "input.candidates is empty and input.scan_mount_dir is disabled; \
                          nothing would ever be probed"
                    .to_string(),
            });
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}
