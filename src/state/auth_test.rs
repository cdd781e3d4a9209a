use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(state.session.token.is_none());
    assert!(state.session.role.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_loading_toggles_without_touching_session() {
    let mut state = AuthState::default();
    state.loading = true;
    assert!(state.loading);
    assert!(state.session.token.is_none());
    state.loading = false;
    assert!(!state.loading);
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn auth_mode_default_is_login() {
    assert_eq!(AuthMode::default(), AuthMode::Login);
}

#[test]
fn auth_mode_variants_are_distinct() {
    assert_ne!(AuthMode::Login, AuthMode::Register);
}
