//! Modal dialog state for the UI.

/// What: Overlay dialogs that capture input until dismissed.
///
/// - Input: Opened by key handlers (F1) or runtime failures that need the
///   user's attention outside a view's own error state.
/// - Output: Rendered above the active screen; Enter/Esc closes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Key binding reference.
    Help,
    /// Informational message (e.g. the system opener failed).
    Alert {
        /// Text shown in the dialog body.
        message: String,
    },
}
