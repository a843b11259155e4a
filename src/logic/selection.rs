use crate::state::BrowseState;

/// Move the selection of a browse view by `delta`, clamped to the visible records.
///
/// Behavior:
/// - No-op when nothing is visible.
/// - Keeps `list_state` in sync so the rendered list scrolls with the selection.
pub fn move_selection(view: &mut BrowseState, delta: isize) {
    if view.visible.is_empty() {
        return;
    }
    let last = view.visible.len() - 1;
    view.selected = view.selected.saturating_add_signed(delta).min(last);
    view.list_state.select(Some(view.selected));
}
