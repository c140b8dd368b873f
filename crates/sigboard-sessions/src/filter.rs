use serde::Serialize;

use crate::types::SessionRecord;

/// The country filter applied to the session table. `None` means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub selected_country: Option<String>,
}

impl FilterState {
    /// Select a specific country outright (stateless surfaces such as the
    /// HTTP API build their filter this way).
    pub fn with_country(country: impl Into<String>) -> Self {
        FilterState {
            selected_country: Some(country.into()),
        }
    }

    /// Toggle the filter: selecting the already-selected country clears it,
    /// anything else replaces the selection. Toggling the same country twice
    /// is the identity.
    pub fn toggle(&self, country: &str) -> FilterState {
        if self.is_selected(country) {
            FilterState::default()
        } else {
            FilterState::with_country(country)
        }
    }

    pub fn is_selected(&self, country: &str) -> bool {
        self.selected_country.as_deref() == Some(country)
    }
}

/// Return the sessions matching the filter, in input order. With no
/// selection the full list is returned unchanged.
pub fn apply<'a>(sessions: &'a [SessionRecord], state: &FilterState) -> Vec<&'a SessionRecord> {
    match state.selected_country.as_deref() {
        Some(code) => sessions
            .iter()
            .filter(|s| s.country_code() == code)
            .collect(),
        None => sessions.iter().collect(),
    }
}

/// Holds the current filter selection for interactive surfaces. This is the
/// only mutable state in the core; mutation goes through `toggle`/`clear`
/// and dependent views are recomputed from the returned state before the
/// next user action is handled.
#[derive(Debug, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn toggle(&mut self, country: &str) -> &FilterState {
        self.state = self.state.toggle(country);
        &self.state
    }

    pub fn clear(&mut self) -> &FilterState {
        self.state = FilterState::default();
        &self.state
    }
}
