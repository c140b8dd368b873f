use sigboard_sessions::{apply, FilterController, FilterState, SessionRecord};

fn session(json: &str) -> SessionRecord {
    serde_json::from_str(json).unwrap()
}

fn fixture() -> Vec<SessionRecord> {
    vec![
        session(r#"{"session_id":"s-001","country":"US"}"#),
        session(r#"{"session_id":"s-002","country":"DE"}"#),
        session(r#"{"session_id":"s-003","country":"US"}"#),
        session(r#"{"session_id":"s-004"}"#),
    ]
}

// ============================================================
// Filter state tests - Toggle transitions
// ============================================================

#[test]
fn test_toggle_selects_a_country() {
    let state = FilterState::default();
    let toggled = state.toggle("US");

    assert_eq!(toggled.selected_country.as_deref(), Some("US"));
    assert!(toggled.is_selected("US"));
    assert!(!toggled.is_selected("DE"));
}

#[test]
fn test_double_toggle_is_identity() {
    let state = FilterState::default();
    let round_trip = state.toggle("US").toggle("US");

    assert_eq!(round_trip, state);
    assert_eq!(round_trip.selected_country, None);
}

#[test]
fn test_toggle_switches_selection() {
    let state = FilterState::default().toggle("US").toggle("DE");

    assert_eq!(state.selected_country.as_deref(), Some("DE"));
}

// ============================================================
// Filter application tests
// ============================================================

#[test]
fn test_apply_without_selection_returns_input_unchanged() {
    let sessions = fixture();
    let filtered = apply(&sessions, &FilterState::default());

    assert_eq!(filtered.len(), sessions.len());
    for (kept, original) in filtered.iter().zip(sessions.iter()) {
        assert_eq!(kept.session_id, original.session_id);
    }
}

#[test]
fn test_apply_filters_by_country() {
    let sessions = fixture();
    let filtered = apply(&sessions, &FilterState::with_country("US"));

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|s| s.country_code() == "US"));
}

#[test]
fn test_apply_matches_the_unk_default() {
    let sessions = fixture();
    let filtered = apply(&sessions, &FilterState::with_country("UNK"));

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].session_id.as_deref(), Some("s-004"));
}

#[test]
fn test_apply_unmatched_country_is_empty() {
    let sessions = fixture();
    let filtered = apply(&sessions, &FilterState::with_country("JP"));

    assert!(filtered.is_empty());
}

#[test]
fn test_toggle_twice_restores_unfiltered_list() {
    let sessions = fixture();

    let mut controller = FilterController::new();
    controller.toggle("US");
    controller.toggle("US");

    let filtered = apply(&sessions, controller.state());
    assert_eq!(filtered.len(), sessions.len());
}

// ============================================================
// Controller tests
// ============================================================

#[test]
fn test_controller_starts_unselected() {
    let controller = FilterController::new();
    assert_eq!(controller.state().selected_country, None);
}

#[test]
fn test_controller_clear_drops_selection() {
    let mut controller = FilterController::new();
    controller.toggle("DE");
    assert!(controller.state().is_selected("DE"));

    controller.clear();
    assert_eq!(controller.state().selected_country, None);
}
