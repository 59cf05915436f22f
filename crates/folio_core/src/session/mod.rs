//! Page-scoped filter sessions.
//!
//! # Responsibility
//! - Own ephemeral filter state for one listing page.
//! - Recompute views synchronously on every state change.
//!
//! # Invariants
//! - Sessions borrow records only when deriving a view; they never own or
//!   mutate catalog data.

pub mod blog;
pub mod project;
