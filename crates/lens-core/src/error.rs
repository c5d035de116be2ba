use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the streamlens core.
#[derive(Error, Debug)]
pub enum LensError {
    /// A named input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A document could not be parsed as a JSON array of play records.
    #[error("File is not a valid JSON array: {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A well-formed document whose top-level array holds no records.
    #[error("File is empty: {path}")]
    EmptyInput { path: PathBuf },

    /// Catch-all for any other read failure, carrying the underlying cause.
    #[error("Failed to load file {path}: {source}")]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A timestamp string did not parse as ISO-8601. Per-record and
    /// non-fatal: the offending record is skipped, never the batch.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),
}

/// Convenience alias used throughout the streamlens crates.
pub type Result<T> = std::result::Result<T, LensError>;
