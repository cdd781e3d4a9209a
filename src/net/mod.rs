//! Networking: the request gateway, typed endpoint wrappers, and wire
//! schemas for the AgroVault backend.

pub mod api;
pub mod error;
pub mod types;
