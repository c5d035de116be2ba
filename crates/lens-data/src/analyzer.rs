//! Play-history aggregation over calendar-year buckets.
//!
//! [`HistoryAnalyzer`] is the engine behind the ranked views: it folds a
//! loaded batch of play records into per-year play and listening-time
//! counters for tracks and artists, then answers sorted queries for one
//! year or for all years combined.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use lens_core::models::{EntityKind, PlayRecord, YearScope, MIN_QUALIFYING_MS};
use lens_core::time_utils::{parse_played_at, YearBucketing};
use tracing::debug;

/// Counters keyed by entity, in first-seen order. Insertion order is what
/// breaks ties in the sorted views.
type CounterMap = IndexMap<String, u64>;

/// Year-bucketed counters: outer key is the calendar year.
type YearCounters = BTreeMap<i32, CounterMap>;

// ── HistoryAnalyzer ───────────────────────────────────────────────────────────

/// Aggregates play records into year-bucketed play and duration counters.
///
/// One instance owns all aggregation state. [`process`](Self::process)
/// rebuilds that state wholesale from a batch; the query methods are
/// read-only. Not safe for concurrent use without external
/// synchronisation: a `process` call must finish before any query runs.
#[derive(Debug, Default)]
pub struct HistoryAnalyzer {
    bucketing: YearBucketing,
    track_plays: YearCounters,
    track_time: YearCounters,
    artist_plays: YearCounters,
    artist_time: YearCounters,
    years: BTreeSet<i32>,
}

impl HistoryAnalyzer {
    /// Analyzer with the default record-local year bucketing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer that derives year buckets under the given rule.
    pub fn with_bucketing(bucketing: YearBucketing) -> Self {
        Self {
            bucketing,
            ..Self::default()
        }
    }

    /// Rebuild all counters from `records`.
    ///
    /// Clears every previous counter first, then makes a single pass. A
    /// record contributes iff it played for at least [`MIN_QUALIFYING_MS`],
    /// names both a non-empty track and a non-empty artist, and carries a
    /// parseable timestamp. Each qualifying record increments exactly one
    /// track key and one artist key in the same year bucket, in both the
    /// play-count and the listening-time maps. A record whose timestamp
    /// fails to parse is skipped on its own, without aborting the batch.
    pub fn process(&mut self, records: &[PlayRecord]) {
        self.track_plays.clear();
        self.track_time.clear();
        self.artist_plays.clear();
        self.artist_time.clear();
        self.years.clear();

        for record in records {
            let ms = record.ms_played;
            if ms < MIN_QUALIFYING_MS {
                continue;
            }

            let (Some(track), Some(artist), Some(ts)) = (
                record.track_name.as_deref().filter(|s| !s.is_empty()),
                record.artist_name.as_deref().filter(|s| !s.is_empty()),
                record.ts.as_deref(),
            ) else {
                continue;
            };

            let played_at = match parse_played_at(ts) {
                Ok(dt) => dt,
                Err(e) => {
                    debug!("Skipping play record: {}", e);
                    continue;
                }
            };
            let year = self.bucketing.year_of(played_at);

            self.years.insert(year);

            let track_key = PlayRecord::track_key(artist, track);
            Self::bump(&mut self.track_plays, year, &track_key, 1);
            Self::bump(&mut self.track_time, year, &track_key, ms);
            Self::bump(&mut self.artist_plays, year, artist, 1);
            Self::bump(&mut self.artist_time, year, artist, ms);
        }
    }

    /// Observed calendar years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.iter().copied().collect()
    }

    /// `(key, play count)` pairs ordered by play count, descending.
    ///
    /// Ties keep the counters' insertion order (stable sort). For a single
    /// year that is the order keys first appeared within that year's data.
    /// [`YearScope::All`] sums each key across every observed year before
    /// sorting, merging buckets in ascending year order, so tied keys from
    /// an earlier year precede those first seen in a later year regardless
    /// of batch position. A year with no data yields an empty list.
    pub fn sorted_by_plays(&self, kind: EntityKind, scope: YearScope) -> Vec<(String, u64)> {
        let plays = Self::scoped(self.plays_of(kind), scope);
        let mut rows: Vec<(String, u64)> = plays.into_iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    /// `(key, play count)` pairs ordered by accumulated listening time,
    /// descending.
    ///
    /// Duration is only the sort key; the emitted value is the play count
    /// for the same scope. A key present in the duration counters but
    /// absent from the play counters is dropped from the result. The two
    /// maps are updated in lockstep so that never happens in practice, but
    /// the filter is part of the view's contract and stays.
    pub fn sorted_by_duration(&self, kind: EntityKind, scope: YearScope) -> Vec<(String, u64)> {
        let time = Self::scoped(self.time_of(kind), scope);
        let plays = Self::scoped(self.plays_of(kind), scope);

        let mut rows: Vec<(String, u64)> = time.into_iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));

        rows.into_iter()
            .filter_map(|(key, _ms)| plays.get(&key).map(|&count| (key, count)))
            .collect()
    }

    /// Accumulated listening time in milliseconds for `key` under `scope`.
    ///
    /// Returns 0 for keys that never qualified in that scope.
    pub fn play_time_ms(&self, kind: EntityKind, scope: YearScope, key: &str) -> u64 {
        let time = self.time_of(kind);
        match scope {
            YearScope::Year(year) => time
                .get(&year)
                .and_then(|per_year| per_year.get(key))
                .copied()
                .unwrap_or(0),
            YearScope::All => time
                .values()
                .filter_map(|per_year| per_year.get(key))
                .sum(),
        }
    }

    // ── Private ───────────────────────────────────────────────────────────────

    fn plays_of(&self, kind: EntityKind) -> &YearCounters {
        match kind {
            EntityKind::Track => &self.track_plays,
            EntityKind::Artist => &self.artist_plays,
        }
    }

    fn time_of(&self, kind: EntityKind) -> &YearCounters {
        match kind {
            EntityKind::Track => &self.track_time,
            EntityKind::Artist => &self.artist_time,
        }
    }

    /// Counters for one year, or the query-time sum across all years,
    /// merging buckets in ascending year order. The combined view is built
    /// here on demand and never stored as a bucket of its own.
    fn scoped(counters: &YearCounters, scope: YearScope) -> CounterMap {
        match scope {
            YearScope::Year(year) => counters.get(&year).cloned().unwrap_or_default(),
            YearScope::All => {
                let mut combined = CounterMap::new();
                for per_year in counters.values() {
                    for (key, value) in per_year {
                        *combined.entry(key.clone()).or_insert(0) += value;
                    }
                }
                combined
            }
        }
    }

    fn bump(counters: &mut YearCounters, year: i32, key: &str, amount: u64) {
        *counters
            .entry(year)
            .or_default()
            .entry(key.to_string())
            .or_insert(0) += amount;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
