//! Streaming-history export discovery and loading.
//!
//! Reads the JSON-array export files a streaming service hands out and
//! converts them into [`PlayRecord`] structs for the aggregation engine.

use std::path::{Path, PathBuf};

use lens_core::error::{LensError, Result};
use lens_core::models::PlayRecord;
use tracing::{info, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.json` files recursively under `dir`, sorted by path.
///
/// A convenience for callers pointed at an extracted export directory;
/// [`load_history_files`] itself takes explicit paths.
pub fn find_history_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Export directory does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load `paths` in the given order and concatenate their play records.
///
/// Each file must parse as a non-empty JSON array. The first failing file
/// aborts the whole load and discards everything read so far:
///
/// * missing file → [`LensError::FileNotFound`]
/// * structurally invalid JSON → [`LensError::MalformedJson`]
/// * well-formed but empty array → [`LensError::EmptyInput`]
/// * any other read failure → [`LensError::LoadFailure`]
///
/// On success the records keep the relative order of `paths` and, within
/// each file, the original element order.
pub fn load_history_files(paths: &[PathBuf]) -> Result<Vec<PlayRecord>> {
    let mut combined: Vec<PlayRecord> = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(LensError::FileNotFound { path: path.clone() });
        }

        let contents = std::fs::read_to_string(path).map_err(|e| LensError::LoadFailure {
            path: path.clone(),
            source: e.into(),
        })?;

        let records: Vec<PlayRecord> =
            serde_json::from_str(&contents).map_err(|e| LensError::MalformedJson {
                path: path.clone(),
                source: e,
            })?;

        if records.is_empty() {
            return Err(LensError::EmptyInput { path: path.clone() });
        }

        info!("Loaded {} entries from {}", records.len(), path.display());
        combined.extend(records);
    }

    Ok(combined)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
