use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is interpreted as an [`EnvFilter`] directive; an invalid
/// directive falls back to `"info"`. Log output goes to stderr so it never
/// mixes with the ranked rows on stdout.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Export-directory discovery ─────────────────────────────────────────────────

/// Attempt to locate an extracted streaming-history export on the local
/// system.
///
/// Checks the following directories in order and returns the first that
/// exists:
/// 1. `./Spotify Extended Streaming History/`
/// 2. `~/Downloads/Spotify Extended Streaming History/`
///
/// Returns `None` when neither exists.
pub fn discover_export_dir() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("Spotify Extended Streaming History")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(
            home.join("Downloads")
                .join("Spotify Extended Streaming History"),
        );
    }
    candidates.into_iter().find(|p| p.is_dir())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
