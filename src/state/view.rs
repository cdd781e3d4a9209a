#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::Role;
use crate::state::session::Session;

/// Top-level view selector.
///
/// An explicit variant instead of a free-form string tag, so the root
/// component matches every transition exhaustively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Landing,
    Authenticating,
    Dashboard(Role),
}

impl View {
    /// Startup view for a stored session. A half-set session (token without
    /// role, or the reverse) is treated as logged out rather than trusted.
    pub fn for_session(session: &Session) -> Self {
        match (&session.token, session.role) {
            (Some(_), Some(role)) => Self::Dashboard(role),
            _ => Self::Landing,
        }
    }
}
