//! URL query sync for shareable filtered views.
//!
//! # Responsibility
//! - Encode/decode the repeatable `filter` query parameter.
//! - Provide the history seam sessions write through.
//!
//! # Invariants
//! - URL is read once to seed state and written on every change; there is
//!   no continuous URL -> state binding.

pub mod codec;
pub mod history;

pub use codec::{
    decode_filter_query, encode_filter_query, merge_filter_query, FILTER_PARAM,
};
pub use history::{FilterLocation, HistorySink, MemoryHistory};
