//! Domain types shared across the streamlens crates.
//!
//! Holds the play-record model, the error taxonomy, timestamp / year-bucket
//! utilities and the display formatting rules.

pub mod error;
pub mod formatting;
pub mod models;
pub mod time_utils;
