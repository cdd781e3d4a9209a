use super::*;

// =============================================================
// Save / read round trip
// =============================================================

#[test]
fn save_then_read_round_trips_the_pair() {
    let store = MemorySession::default();
    store.save("T1", Role::Farmer);
    assert_eq!(
        store.read(),
        Session {
            token: Some("T1".to_owned()),
            role: Some(Role::Farmer),
        }
    );
}

#[test]
fn save_overwrites_a_previous_session() {
    let store = MemorySession::default();
    store.save("T1", Role::Farmer);
    store.save("T2", Role::Banker);
    let session = store.read();
    assert_eq!(session.token.as_deref(), Some("T2"));
    assert_eq!(session.role, Some(Role::Banker));
}

#[test]
fn read_before_any_save_is_empty() {
    let store = MemorySession::default();
    let session = store.read();
    assert!(session.token.is_none());
    assert!(session.role.is_none());
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_then_read_yields_both_fields_absent() {
    let store = MemorySession::default();
    store.save("T1", Role::Operator);
    store.clear();
    assert_eq!(store.read(), Session::default());
}

#[test]
fn clear_without_a_session_is_a_noop() {
    let store = MemorySession::default();
    store.clear();
    assert_eq!(store.read(), Session::default());
}

#[test]
fn clear_is_idempotent() {
    let store = MemorySession::default();
    store.save("T1", Role::Admin);
    store.clear();
    let after_once = store.read();
    store.clear();
    assert_eq!(store.read(), after_once);
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_authenticated_only_when_both_fields_set() {
    assert!(!Session::default().is_authenticated());
    assert!(
        !Session {
            token: Some("T1".to_owned()),
            role: None,
        }
        .is_authenticated()
    );
    assert!(
        !Session {
            token: None,
            role: Some(Role::Farmer),
        }
        .is_authenticated()
    );
    assert!(
        Session {
            token: Some("T1".to_owned()),
            role: Some(Role::Farmer),
        }
        .is_authenticated()
    );
}

#[test]
fn session_persists_as_a_single_json_document() {
    let session = Session {
        token: Some("T1".to_owned()),
        role: Some(Role::Operator),
    };
    let json = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
