//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `view`) so individual
//! components can depend on small focused models. The session store is the
//! only state that outlives a page load.

pub mod auth;
pub mod session;
pub mod view;
