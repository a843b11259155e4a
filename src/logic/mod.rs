//! Core non-UI logic split into modular submodules.

pub mod detail;
pub mod filter;
pub mod navigation;
pub mod query;
pub mod selection;
pub mod sort;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use filter::{apply_view_preserve_selection, facet_values, matches_query, visible};
pub use navigation::{can_next, can_prev, open_from};
pub use query::{ensure_loaded, request_detail, request_records};
pub use selection::move_selection;
pub use sort::sort_records;
