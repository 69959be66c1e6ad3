use super::*;

fn visible_count(state: &UiState) -> usize {
    Panel::ALL.into_iter().filter(|p| state.is_visible(*p)).count()
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_query_panel() {
    let state = UiState::default();
    assert!(state.is_visible(Panel::Query));
    assert!(!state.is_visible(Panel::Adaptive));
    assert!(state.is_tab_active(Panel::Query));
}

// =============================================================
// switch_tab
// =============================================================

#[test]
fn switch_to_query_shows_exactly_one_panel() {
    let mut state = UiState::default();
    state.switch_tab("adaptive");
    state.switch_tab("query");
    assert_eq!(visible_count(&state), 1);
    assert!(state.is_visible(Panel::Query));
    assert!(state.is_tab_active(Panel::Query));
    assert!(!state.is_tab_active(Panel::Adaptive));
}

#[test]
fn switch_to_adaptive_flips_both_buttons() {
    let mut state = UiState::default();
    state.switch_tab("adaptive");
    assert_eq!(visible_count(&state), 1);
    assert!(state.is_visible(Panel::Adaptive));
    assert!(state.is_tab_active(Panel::Adaptive));
    assert!(!state.is_tab_active(Panel::Query));
}

#[test]
fn switch_to_unknown_hides_all_and_activates_second_button() {
    let mut state = UiState::default();
    state.switch_tab("settings");
    assert_eq!(visible_count(&state), 0);
    assert_eq!(state.visible_panel, None);
    assert!(state.is_tab_active(Panel::Adaptive));
}

#[test]
fn switch_is_idempotent() {
    let mut state = UiState::default();
    state.switch_tab("query");
    let once = state.clone();
    state.switch_tab("query");
    assert_eq!(state, once);
}

// =============================================================
// Panel
// =============================================================

#[test]
fn panel_ids_round_trip() {
    for panel in Panel::ALL {
        assert_eq!(Panel::from_id(panel.id()), Some(panel));
    }
    assert_eq!(Panel::from_id("Query"), None);
}
