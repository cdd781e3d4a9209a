//! Reusable UI components shared across pages.

pub mod stat_card;
pub mod topbar;
