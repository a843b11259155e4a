use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{apply_view_preserve_selection, facet_values};
use crate::state::{BrowseState, FilterGroup, Focus};

/// What: Flatten the gallery's filter toggles in display order.
///
/// Inputs:
/// - `view`: Gallery state
///
/// Output:
/// - `(group, value)` pairs: every value present in the record set, plus any selected
///   value that the current record set no longer contains (so it can still be toggled off).
#[must_use]
pub fn filter_entries(view: &BrowseState) -> Vec<(FilterGroup, String)> {
    let records = view
        .records
        .loaded()
        .map(|rs| rs.records.as_slice())
        .unwrap_or_default();
    let mut out = Vec::new();
    for group in FilterGroup::ALL {
        let mut values = facet_values(records, group);
        if let Some(selected) = view.filters.accepted(group) {
            for v in selected {
                if !values.contains(v) {
                    values.push(v.clone());
                }
            }
            values.sort();
        }
        out.extend(values.into_iter().map(|v| (group, v)));
    }
    out
}

/// Handle key events while the gallery's filter panel has focus.
///
/// Up/Down move the cursor, Space or Enter toggle the value under it, Ctrl+X
/// clears every filter and the query, and Tab or Esc return to the search input.
pub fn handle_filters_key(ke: &KeyEvent, view: &mut BrowseState) {
    let entries = filter_entries(view);
    let last = entries.len().saturating_sub(1);
    match ke.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => view.focus = Focus::Search,
        KeyCode::Up => view.filter_cursor = view.filter_cursor.saturating_sub(1),
        KeyCode::Down => view.filter_cursor = (view.filter_cursor + 1).min(last),
        KeyCode::Home => view.filter_cursor = 0,
        KeyCode::End => view.filter_cursor = last,
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some((group, value)) = entries.get(view.filter_cursor) {
                view.filters.toggle(*group, value);
                tracing::debug!(group = group.label(), value, "filter toggled");
                apply_view_preserve_selection(view);
            }
        }
        KeyCode::Char('x') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            view.filters.clear();
            view.query.clear();
            apply_view_preserve_selection(view);
        }
        _ => {}
    }
}
