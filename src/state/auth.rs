#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::Session;

/// Authentication state shared via context: the live session plus a busy
/// flag for in-flight login/register calls.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

/// Which form the auth page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}
