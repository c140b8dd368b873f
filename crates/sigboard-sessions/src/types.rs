use serde::{Deserialize, Serialize};

/// Country code used when a session carries no (or an empty) country.
pub const UNKNOWN_COUNTRY: &str = "UNK";

/// One diagnostic session document as fetched from the data source.
///
/// Every field is optional: documents come from heterogeneous probes and a
/// missing field degrades to a default instead of failing deserialization.
/// Unrecognized fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub checks: Vec<Check>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub status: Option<String>,
}

/// A single named check inside a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Check {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

impl SessionRecord {
    /// Overall status of the session, classified from `summary.status`.
    pub fn status(&self) -> Status {
        Status::classify(self.summary.as_ref().and_then(|s| s.status.as_deref()))
    }

    /// Country code with the explicit `UNK` default for absent or empty values.
    pub fn country_code(&self) -> &str {
        match self.country.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => UNKNOWN_COUNTRY,
        }
    }

    /// Sort key for the session table: missing timestamps compare as the
    /// empty string so they land at the end of a descending sort.
    pub fn generated_at_key(&self) -> &str {
        self.generated_at.as_deref().unwrap_or("")
    }
}

/// Session-level outcome. "Signal" is the observational name for a failed
/// session; anything unrecognized is Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warn,
    Signal,
    Unknown,
}

impl Status {
    /// Classify a raw `summary.status` value. The match is case-insensitive;
    /// missing or unmapped values become Unknown.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_lowercase()).as_deref() {
            Some("pass") => Status::Pass,
            Some("warn") => Status::Warn,
            Some("fail") => Status::Signal,
            _ => Status::Unknown,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Pass => "\u{2713}",
            Status::Warn => "\u{25B3}",
            Status::Signal => "\u{25CF}",
            Status::Unknown => "?",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Warn => "WARN",
            Status::Signal => "SIGNAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

/// Aggregate statistics over a set of sessions. Recomputed from scratch on
/// every aggregation; never mutated incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub pass: usize,
    pub warn: usize,
    pub signal: usize,
    /// Counts per failing check name, in order of first occurrence.
    pub by_signal_type: Vec<SignalTypeCount>,
    /// Per-country tallies, in order of first occurrence.
    pub by_country: Vec<CountryStats>,
}

impl Statistics {
    /// Sessions whose status mapped to no bucket. Always
    /// `total - pass - warn - signal`.
    pub fn unknown(&self) -> usize {
        self.total - self.pass - self.warn - self.signal
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalTypeCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryStats {
    pub country: String,
    pub sessions: usize,
    pub pass: usize,
    pub warn: usize,
    pub fail: usize,
}
