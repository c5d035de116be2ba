//! Data layer for streamlens.
//!
//! Responsible for discovering and loading streaming-history export files
//! into play records, and for the aggregation engine that turns a batch of
//! records into year-bucketed play and listening-time rankings.

pub mod analyzer;
pub mod loader;

pub use lens_core as core;
