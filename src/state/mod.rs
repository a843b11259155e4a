//! Application state: value types, per-view state and modals.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::{AppState, BrowseState, DetailState, Focus, Screen};
pub use modal::Modal;
pub use types::{
    Artwork, DetailRequest, DetailResult, Fetch, FilterGroup, FilterSelection, NavContext,
    Pagination, RecordSet, RecordsRequest, RecordsResult, SearchPage, SortField, SortOrder,
    SortSpec, UNKNOWN, ViewKind, or_unknown, present,
};
