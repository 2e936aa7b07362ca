use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode());
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_reports_dark_theme() {
    let state = UiState { theme: Theme::Dark };
    assert!(state.dark_mode());
}
