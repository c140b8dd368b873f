use std::collections::HashMap;

use crate::types::{CountryStats, SessionRecord, SignalTypeCount, Statistics, Status};

/// Check-level status that marks a check as failed. Unlike the session-level
/// status this match is case-sensitive: probes emit check statuses in upper
/// case and a lower-case value is not a failure marker.
const CHECK_FAILED: &str = "FAIL";

/// Compute aggregate statistics over a set of sessions.
///
/// Counts depend only on the multiset of inputs. The `by_signal_type` and
/// `by_country` vectors keep first-occurrence order so that downstream sorts
/// have a stable, documented tie-break.
pub fn summarize(sessions: &[SessionRecord]) -> Statistics {
    let mut stats = Statistics {
        total: sessions.len(),
        ..Default::default()
    };

    let mut signal_index: HashMap<String, usize> = HashMap::new();
    let mut country_index: HashMap<String, usize> = HashMap::new();

    for session in sessions {
        let status = session.status();

        match status {
            Status::Pass => stats.pass += 1,
            Status::Warn => stats.warn += 1,
            Status::Signal => stats.signal += 1,
            Status::Unknown => {}
        }

        // Checks only carry signal types when the session itself failed.
        if status == Status::Signal {
            for check in &session.checks {
                if check.status == CHECK_FAILED {
                    let idx = *signal_index.entry(check.name.clone()).or_insert_with(|| {
                        stats.by_signal_type.push(SignalTypeCount {
                            name: check.name.clone(),
                            count: 0,
                        });
                        stats.by_signal_type.len() - 1
                    });
                    stats.by_signal_type[idx].count += 1;
                }
            }
        }

        let country = session.country_code();
        let idx = *country_index.entry(country.to_string()).or_insert_with(|| {
            stats.by_country.push(CountryStats {
                country: country.to_string(),
                sessions: 0,
                pass: 0,
                warn: 0,
                fail: 0,
            });
            stats.by_country.len() - 1
        });

        let entry = &mut stats.by_country[idx];
        entry.sessions += 1;
        match status {
            Status::Pass => entry.pass += 1,
            Status::Warn => entry.warn += 1,
            Status::Signal => entry.fail += 1,
            Status::Unknown => {}
        }
    }

    stats
}
