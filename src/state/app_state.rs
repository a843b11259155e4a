//! Central `AppState` container shared by the event, logic and UI layers.

use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::types::{
    Artwork, Fetch, FilterSelection, NavContext, RecordSet, SortSpec, ViewKind,
};
use crate::theme::Settings;

/// Top-level screen currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    /// Sortable list view.
    #[default]
    List,
    /// Filterable gallery view.
    Gallery,
    /// Single-record detail page.
    Detail,
}

impl From<ViewKind> for Screen {
    fn from(kind: ViewKind) -> Self {
        match kind {
            ViewKind::List => Self::List,
            ViewKind::Gallery => Self::Gallery,
        }
    }
}

/// Which part of a browse view receives typed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    /// The query input (typing edits the query, arrows move the selection).
    #[default]
    Search,
    /// The gallery's filter toggles.
    Filters,
}

/// State of one browse view (list or gallery).
///
/// Each view owns its own record set, query and selection so switching views
/// or returning from a detail page restores exactly what the user left.
#[derive(Debug)]
pub struct BrowseState {
    /// Which view this is.
    pub kind: ViewKind,
    /// Loaded record set (or loading/failed state).
    pub records: Fetch<RecordSet>,
    /// Free-text filter typed by the user (applied client-side).
    pub query: String,
    /// Server-side search text sent with records requests (empty lists the collection).
    pub remote_query: String,
    /// Categorical filters (gallery only; always empty in the list).
    pub filters: FilterSelection,
    /// Active sort (the gallery keeps API order).
    pub sort: Option<SortSpec>,
    /// Records currently visible, derived from the fields above.
    pub visible: Vec<Artwork>,
    /// Index into `visible` of the highlighted record.
    pub selected: usize,
    /// Scroll/selection state for the rendered list.
    pub list_state: ListState,
    /// One-based remote page currently loaded or requested.
    pub page: u32,
    /// Id of the newest records request; older responses are dropped.
    pub latest_request_id: u64,
    /// Input focus.
    pub focus: Focus,
    /// Cursor over the flattened filter toggles.
    pub filter_cursor: usize,
    /// Card columns of the last rendered gallery grid.
    pub columns: usize,
}

impl BrowseState {
    /// What: Create an empty browse view.
    ///
    /// Inputs:
    /// - `kind`: List or gallery
    /// - `sort`: Initial sort, `None` to keep API order
    ///
    /// Output:
    /// - Idle view on page 1 with no selection.
    #[must_use]
    pub fn new(kind: ViewKind, sort: Option<SortSpec>) -> Self {
        Self {
            kind,
            records: Fetch::Idle,
            query: String::new(),
            remote_query: String::new(),
            filters: FilterSelection::default(),
            sort,
            visible: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            page: 1,
            latest_request_id: 0,
            focus: Focus::Search,
            filter_cursor: 0,
            columns: 1,
        }
    }

    /// Number of records in the loaded set (zero unless loaded).
    #[must_use]
    pub fn loaded_len(&self) -> usize {
        self.records.loaded().map_or(0, |rs| rs.records.len())
    }

    /// Currently highlighted visible record.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Artwork> {
        self.visible.get(self.selected)
    }
}

/// State of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    /// Record being shown (or fetched).
    pub record_id: u64,
    /// Fetched record.
    pub record: Fetch<Artwork>,
    /// Prev/next context; `None` when the page was opened directly.
    pub nav: Option<NavContext>,
    /// View Esc returns to.
    pub return_to: ViewKind,
    /// Id of the newest detail request; older responses are dropped.
    pub latest_request_id: u64,
}

/// Global application state.
#[derive(Debug)]
pub struct AppState {
    /// Screen currently rendered.
    pub screen: Screen,
    /// List view state.
    pub list: BrowseState,
    /// Gallery view state.
    pub gallery: BrowseState,
    /// Detail page state, present once a record has been opened.
    pub detail: Option<DetailState>,
    /// Active modal overlay.
    pub modal: Modal,
    /// Effective settings (config file merged with CLI overrides).
    pub settings: Settings,
    /// Next id handed to a records or detail request.
    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    /// What: Build the initial state from effective settings.
    ///
    /// Inputs:
    /// - `settings`: Config merged with CLI overrides
    ///
    /// Output:
    /// - State showing the configured default view; the list uses the configured sort.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            screen: settings.default_view.into(),
            list: BrowseState::new(ViewKind::List, Some(settings.sort)),
            gallery: BrowseState::new(ViewKind::Gallery, None),
            detail: None,
            modal: Modal::None,
            settings,
            next_request_id: 1,
        }
    }

    /// Browse state for `kind`.
    #[must_use]
    pub const fn browse(&self, kind: ViewKind) -> &BrowseState {
        match kind {
            ViewKind::List => &self.list,
            ViewKind::Gallery => &self.gallery,
        }
    }

    /// Mutable browse state for `kind`.
    pub const fn browse_mut(&mut self, kind: ViewKind) -> &mut BrowseState {
        match kind {
            ViewKind::List => &mut self.list,
            ViewKind::Gallery => &mut self.gallery,
        }
    }

    /// Browse view kind behind the current screen, if it is a browse screen.
    #[must_use]
    pub const fn active_view(&self) -> Option<ViewKind> {
        match self.screen {
            Screen::List => Some(ViewKind::List),
            Screen::Gallery => Some(ViewKind::Gallery),
            Screen::Detail => None,
        }
    }

    /// Hand out a fresh request id.
    pub const fn take_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }
}
