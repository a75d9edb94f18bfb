//! Dataset discovery: ordered candidate probing under a compute mount.
//!
//! Compute platforms are inconsistent about how they materialize job inputs:
//! sometimes the mount root is the dataset file itself, sometimes the file
//! sits at a conventional relative path, and sometimes it is the only file
//! in the root directory under an opaque name. The locator probes all three
//! arrangements in a fixed order instead of scattering path checks inline.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::InputConfig;
use crate::core::errors::{Result, RockrError};

/// Resolves the dataset location from an ordered probe list.
#[derive(Debug, Clone)]
pub struct InputLocator {
    root: PathBuf,
    candidates: Vec<PathBuf>,
    scan_mount_dir: bool,
}

impl InputLocator {
    /// Locator over `root` with explicit candidate paths.
    #[must_use]
    pub fn new(root: PathBuf, candidates: Vec<PathBuf>, scan_mount_dir: bool) -> Self {
        Self {
            root,
            candidates,
            scan_mount_dir,
        }
    }

    /// Locator configured from the `[input]` config section.
    #[must_use]
    pub fn from_config(input: &InputConfig) -> Self {
        Self::new(
            input.mount_root.clone(),
            input.candidates.clone(),
            input.scan_mount_dir,
        )
    }

    /// Resolve the dataset path.
    ///
    /// Probe order: the mount root itself as a regular file, each candidate
    /// relative to the root, then (when enabled) the first regular file in
    /// the root directory in name-sorted order. Sorting makes the last
    /// resort deterministic across platforms.
    pub fn locate(&self) -> Result<PathBuf> {
        let mut probed = 1;
        if self.root.is_file() {
            return Ok(self.root.clone());
        }

        for candidate in &self.candidates {
            let path = self.root.join(candidate);
            probed += 1;
            if path.is_file() {
                return Ok(path);
            }
        }

        if self.scan_mount_dir && self.root.is_dir() {
            probed += 1;
            if let Some(found) = first_file_sorted(&self.root)? {
                return Ok(found);
            }
        }

        Err(RockrError::DataNotFound {
            root: self.root.clone(),
            probed,
        })
    }
}

/// First regular file in `dir`, by file name. Subdirectories are skipped.
fn first_file_sorted(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| RockrError::io(dir, source))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter().next())
}
