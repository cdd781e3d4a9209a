//! Top-level pages, one per view: landing, auth, and the four role
//! dashboards.

pub mod admin;
pub mod auth;
pub mod banker;
pub mod farmer;
pub mod landing;
pub mod operator;
