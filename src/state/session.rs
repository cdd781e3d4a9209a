//! Persisted session: bearer token plus selected role.
//!
//! The store is injectable so anything issuing requests can be exercised
//! against an in-memory stand-in instead of real browser storage. The
//! browser backend keeps the whole session as one JSON document under a
//! single localStorage key, so token and role can never go out of sync.
//!
//! There is no expiry or refresh: a token is trusted until the backend
//! rejects it, and even then the session is only cleared by an explicit
//! logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Role;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "agrovault_session";

/// The persisted authentication pair. Both fields are absent when logged
/// out; they are only ever written together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// True only when both halves of the pair are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.role.is_some()
    }
}

/// Save/clear/read lifecycle over some persistence backend.
pub trait SessionStore: Send + Sync {
    /// Persist both values, overwriting any previous session. The token is
    /// not validated.
    fn save(&self, token: &str, role: Role);

    /// Remove the stored session. A no-op when none exists.
    fn clear(&self);

    /// The currently stored session; empty when never set or after `clear`.
    fn read(&self) -> Session;
}

/// localStorage-backed store used by the running app. Requires a browser
/// environment; on other targets every operation is a stub.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn save(&self, token: &str, role: Role) {
        #[cfg(feature = "hydrate")]
        {
            let session = Session {
                token: Some(token.to_owned()),
                role: Some(role),
            };
            if let Ok(json) = serde_json::to_string(&session) {
                if let Some(storage) = local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, &json);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, role);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }

    fn read(&self) -> Session {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Ok(Some(json)) = storage.get_item(STORAGE_KEY) {
                    if let Ok(session) = serde_json::from_str(&json) {
                        return session;
                    }
                }
            }
            Session::default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Session::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// In-memory store; the test stand-in for `BrowserSession`.
#[derive(Debug, Default)]
pub struct MemorySession(std::sync::Mutex<Session>);

impl SessionStore for MemorySession {
    fn save(&self, token: &str, role: Role) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Session {
                token: Some(token.to_owned()),
                role: Some(role),
            };
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Session::default();
        }
    }

    fn read(&self) -> Session {
        self.0.lock().map(|slot| slot.clone()).unwrap_or_default()
    }
}
