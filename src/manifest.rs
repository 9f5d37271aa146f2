//! Run manifest: the JSON summary of which events produced a usable
//! screenshot.
//!
//! Written once at the end of a run, overwriting any prior manifest. The
//! shape is stable and consumed by the site build that embeds the
//! screenshots.

use crate::store::artifact_name;
use crate::{Error, FetchResult, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILENAME: &str = "manifest.json";

/// One usable screenshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: u32,
    pub filename: String,
}

/// Summary of a whole run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub screenshots: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build the manifest from a run's results, preserving event order.
    ///
    /// Cached and freshly downloaded screenshots both count as successful;
    /// failed events are counted but listed nowhere in `screenshots`.
    pub fn from_results(results: &[FetchResult]) -> Self {
        let screenshots: Vec<ManifestEntry> = results
            .iter()
            .filter(|r| r.is_success())
            .map(|r| ManifestEntry {
                id: r.id,
                filename: artifact_name(r.id),
            })
            .collect();

        Self {
            total: results.len(),
            successful: screenshots.len(),
            failed: results.len() - screenshots.len(),
            screenshots,
        }
    }

    /// Serialize to `manifest.json` in `dir` with 2-space indentation,
    /// overwriting unconditionally. Returns the path written.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILENAME);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Storage(format!("Failed to serialize manifest: {}", e)))?;
        fs::write(&path, json).map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }
}
