//! Content records rendered by the portfolio views.
//!
//! # Responsibility
//! - Define project and blog post shapes as loaded from content data.
//!
//! # Invariants
//! - Records are immutable after catalog load; views only borrow them.

pub mod post;
pub mod project;
