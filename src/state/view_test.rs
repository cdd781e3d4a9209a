use super::*;

// =============================================================
// View defaults and transitions
// =============================================================

#[test]
fn default_view_is_landing() {
    assert_eq!(View::default(), View::Landing);
}

#[test]
fn full_session_opens_the_dashboard_for_its_role() {
    for role in Role::ALL {
        let session = Session {
            token: Some("T1".to_owned()),
            role: Some(role),
        };
        assert_eq!(View::for_session(&session), View::Dashboard(role));
    }
}

#[test]
fn empty_session_lands_on_landing() {
    assert_eq!(View::for_session(&Session::default()), View::Landing);
}

#[test]
fn token_without_role_is_not_trusted() {
    let session = Session {
        token: Some("T1".to_owned()),
        role: None,
    };
    assert_eq!(View::for_session(&session), View::Landing);
}

#[test]
fn role_without_token_is_not_trusted() {
    let session = Session {
        token: None,
        role: Some(Role::Admin),
    };
    assert_eq!(View::for_session(&session), View::Landing);
}
