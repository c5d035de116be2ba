use chrono::{DateTime, Datelike, FixedOffset};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::{LensError, Result};

// ── System timezone detection ─────────────────────────────────────────────────

/// Detect the IANA timezone name of the running system.
///
/// Falls back to `"UTC"` if detection fails.
pub fn system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Parse a play timestamp as RFC 3339, accepting a trailing `Z` as `+00:00`.
///
/// The offset found in the string is preserved rather than converted to UTC,
/// so callers can take the calendar date in the record's own timezone.
pub fn parse_played_at(s: &str) -> Result<DateTime<FixedOffset>> {
    if s.is_empty() {
        return Err(LensError::TimestampParse(s.to_string()));
    }

    // Replace trailing 'Z' with '+00:00' for RFC 3339 compatibility.
    let normalised = if let Some(stripped) = s.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        s.to_string()
    };

    DateTime::parse_from_rfc3339(&normalised)
        .map_err(|_| LensError::TimestampParse(s.to_string()))
}

// ── Year bucketing ────────────────────────────────────────────────────────────

/// How the calendar year of a play is derived from its timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearBucketing {
    /// Take the year in the record's own UTC offset. This is what the
    /// export data implies and the default behavior.
    #[default]
    LocalOffset,
    /// Convert to one fixed timezone before taking the year, so exports
    /// spanning timezones bucket consistently.
    Normalized(Tz),
}

impl YearBucketing {
    /// Build the normalized variant from an IANA timezone name.
    ///
    /// An unrecognised name falls back to local-offset bucketing and logs
    /// a warning.
    pub fn normalized(tz_name: &str) -> Self {
        match tz_name.parse::<Tz>() {
            Ok(tz) => Self::Normalized(tz),
            Err(_) => {
                warn!(
                    "Unrecognised timezone \"{}\", keeping record-local year bucketing",
                    tz_name
                );
                Self::LocalOffset
            }
        }
    }

    /// Calendar year of `played_at` under this bucketing rule.
    pub fn year_of(self, played_at: DateTime<FixedOffset>) -> i32 {
        match self {
            Self::LocalOffset => played_at.year(),
            Self::Normalized(tz) => played_at.with_timezone(&tz).year(),
        }
    }
}
