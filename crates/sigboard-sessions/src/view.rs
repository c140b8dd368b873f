//! Presentation ordering shared by every rendering surface.
//!
//! Identical inputs must produce identical row orders no matter which
//! surface renders them, so the sort and ratio rules live here rather than
//! in the renderers.

use chrono::{DateTime, Utc};

use crate::filter::{self, FilterState};
use crate::types::{SessionRecord, Statistics};

/// Default number of rows in the recent-session table.
pub const RECENT_LIMIT: usize = 20;

/// One bar of the signal-type chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalTypeRow {
    pub name: String,
    pub count: usize,
    /// Width relative to the largest count, in `0.0..=1.0`.
    pub ratio: f64,
}

/// One row of the country breakdown table.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    pub country: String,
    pub sessions: usize,
    pub pass: usize,
    pub warn: usize,
    pub fail: usize,
    pub pass_ratio: f64,
    pub warn_ratio: f64,
    pub fail_ratio: f64,
    pub selected: bool,
}

/// Signal-type bars sorted by count descending. Ties keep the order in
/// which the names were first seen (the sort is stable over the
/// first-occurrence order kept by the aggregator).
pub fn signal_type_rows(stats: &Statistics) -> Vec<SignalTypeRow> {
    let mut entries = stats.by_signal_type.clone();
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    let max_count = entries.first().map(|e| e.count).unwrap_or(0);

    entries
        .into_iter()
        .map(|e| SignalTypeRow {
            ratio: ratio(e.count, max_count),
            name: e.name,
            count: e.count,
        })
        .collect()
}

/// Country rows in the table's total order: fail desc, warn desc, sessions
/// desc, country code ascending.
pub fn country_rows(stats: &Statistics, state: &FilterState) -> Vec<CountryRow> {
    let mut entries = stats.by_country.clone();
    entries.sort_by(|a, b| {
        b.fail
            .cmp(&a.fail)
            .then(b.warn.cmp(&a.warn))
            .then(b.sessions.cmp(&a.sessions))
            .then(a.country.cmp(&b.country))
    });

    entries
        .into_iter()
        .map(|e| CountryRow {
            pass_ratio: ratio(e.pass, e.sessions),
            warn_ratio: ratio(e.warn, e.sessions),
            fail_ratio: ratio(e.fail, e.sessions),
            selected: state.is_selected(&e.country),
            country: e.country,
            sessions: e.sessions,
            pass: e.pass,
            warn: e.warn,
            fail: e.fail,
        })
        .collect()
}

/// The filtered session table: country filter applied first, then sorted by
/// `generated_at` descending (missing timestamps last), then truncated.
pub fn recent_sessions<'a>(
    sessions: &'a [SessionRecord],
    state: &FilterState,
    limit: usize,
) -> Vec<&'a SessionRecord> {
    let mut filtered = filter::apply(sessions, state);
    filtered.sort_by(|a, b| b.generated_at_key().cmp(a.generated_at_key()));
    filtered.truncate(limit);
    filtered
}

/// The latest ingest timestamp across all sessions, formatted as
/// `YYYY-MM-DD HH:MM:SS UTC`. None when no session carries a parseable
/// timestamp.
pub fn last_ingest(sessions: &[SessionRecord]) -> Option<String> {
    let latest = sessions
        .iter()
        .filter_map(|s| s.generated_at.as_deref())
        .max()?;

    let parsed: DateTime<Utc> = DateTime::parse_from_rfc3339(latest).ok()?.with_timezone(&Utc);
    Some(parsed.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Proportion with a guarded denominator: zero denominators yield 0.0 so
/// bar widths never go non-numeric.
fn ratio(count: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        count as f64 / denominator as f64
    }
}
