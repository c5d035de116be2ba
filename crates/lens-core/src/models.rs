use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum played duration in milliseconds for a record to count as a play.
///
/// Anything shorter is treated as a skip and contributes to no counter.
/// The boundary is inclusive: exactly 20 000 ms qualifies.
pub const MIN_QUALIFYING_MS: u64 = 20_000;

/// A single play record from a streaming-history export file.
///
/// Every field is optional in the export; absent fields take the serde
/// defaults below. Unknown export fields (platform, country, shuffle flags,
/// ...) are ignored on deserialisation. Records are transient: they exist
/// only for the duration of one aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Milliseconds the track was actually played. Defaults to 0.
    #[serde(default)]
    pub ms_played: u64,
    /// Track title, when the record carries track metadata.
    #[serde(default, rename = "master_metadata_track_name")]
    pub track_name: Option<String>,
    /// Album-artist name, when the record carries track metadata.
    #[serde(default, rename = "master_metadata_album_artist_name")]
    pub artist_name: Option<String>,
    /// ISO-8601 timestamp of the play. A trailing `Z` marks UTC.
    #[serde(default)]
    pub ts: Option<String>,
}

impl PlayRecord {
    /// The key under which track counters accumulate: `"{artist} - {track}"`.
    ///
    /// Two records with the same artist and track collapse to the same key
    /// whatever their other fields say.
    pub fn track_key(artist: &str, track: &str) -> String {
        format!("{} - {}", artist, track)
    }
}

/// Which entity dimension a ranked view is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Rank `"{artist} - {track}"` keys.
    Track,
    /// Rank raw artist names.
    Artist,
}

/// Year scope of a query: one observed calendar year, or all of them
/// summed together at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearScope {
    /// Combine every observed year. Never stored as a bucket of its own.
    All,
    /// Restrict to a single calendar year.
    Year(i32),
}

impl FromStr for YearScope {
    type Err = String;

    /// Parses `"all"` (case-insensitive) or a calendar year like `"2023"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<i32>()
            .map(Self::Year)
            .map_err(|_| format!("expected \"all\" or a calendar year, got \"{}\"", s))
    }
}

impl std::fmt::Display for YearScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Year(year) => write!(f, "{}", year),
        }
    }
}
