//! Shared rendering helpers: geometry, load-state placeholders, the query line
//! and footer key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::state::{BrowseState, Fetch, Focus, Screen};
use crate::theme::theme;

/// Message shown when a loaded view has no visible records.
pub const NO_MATCHES: &str = "No artworks found matching your search.";

/// What: Compute a rectangle of at most `w` x `h` centered inside `area`.
///
/// Output:
/// - The clamped, centered `Rect`.
#[must_use]
pub fn centered_rect(w: u16, h: u16, area: Rect) -> Rect {
    let width = w.min(area.width);
    let height = h.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// What: Message and colour to show instead of content for a non-loaded fetch.
///
/// Inputs:
/// - `fetch`: Load state of the content
/// - `loading`: Message for the in-flight state
///
/// Output:
/// - `None` when loaded; otherwise the placeholder text and its colour.
#[must_use]
pub fn fetch_placeholder<T>(fetch: &Fetch<T>, loading: &str) -> Option<(String, Color)> {
    let th = theme();
    match fetch {
        Fetch::Loaded(_) => None,
        Fetch::Idle | Fetch::Loading => Some((loading.to_string(), th.subtext0)),
        Fetch::Failed(msg) => Some((msg.clone(), th.red)),
    }
}

/// What: Build the query input line for a browse view.
///
/// Details:
/// - Shows the server-side search (if any) next to the local query; a block caret marks
///   the input while it has focus.
#[must_use]
pub fn query_line(view: &BrowseState) -> Line<'static> {
    let th = theme();
    let focused = view.focus == Focus::Search;
    let mut spans = vec![
        Span::styled(
            "> ",
            Style::default()
                .fg(if focused { th.sapphire } else { th.overlay1 })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(view.query.clone(), Style::default().fg(th.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(th.lavender)));
    }
    if view.query.is_empty() && !focused {
        spans.push(Span::styled(
            "type to filter",
            Style::default().fg(th.overlay1),
        ));
    }
    if !view.remote_query.is_empty() {
        spans.push(Span::styled(
            format!("   search: \"{}\"", view.remote_query),
            Style::default().fg(th.overlay2),
        ));
    }
    Line::from(spans)
}

/// Page indicator from the loaded pagination, e.g. `page 2 of 13`.
#[must_use]
pub fn page_label(view: &BrowseState) -> String {
    match view.records.loaded() {
        Some(set) if set.pagination.total_pages > 0 => {
            format!("page {} of {}", view.page, set.pagination.total_pages)
        }
        _ => format!("page {}", view.page),
    }
}

/// Key/label pairs shown in the footer for the current screen and focus.
#[must_use]
pub fn key_hints(screen: Screen, focus: Focus) -> Vec<(&'static str, &'static str)> {
    let mut hints = match (screen, focus) {
        (Screen::Detail, _) => vec![
            ("←/h", "prev"),
            ("→/l", "next"),
            ("Esc", "back"),
            ("o", "open image"),
            ("r", "reload"),
        ],
        (Screen::Gallery, Focus::Filters) => vec![
            ("↑/↓", "move"),
            ("Space", "toggle"),
            ("^X", "clear"),
            ("Tab", "search"),
        ],
        (Screen::Gallery, Focus::Search) => vec![
            ("↑↓←→", "move"),
            ("Enter", "open"),
            ("Tab", "filters"),
            ("^R", "search API"),
            ("PgUp/PgDn", "page"),
        ],
        (Screen::List, _) => vec![
            ("↑/↓", "move"),
            ("Enter", "open"),
            ("S-Tab", "sort field"),
            ("^O", "order"),
            ("^R", "search API"),
            ("PgUp/PgDn", "page"),
        ],
    };
    hints.extend([("F1", "help"), ("^C", "quit")]);
    hints
}

/// Render hint pairs as one styled footer line.
#[must_use]
pub fn hints_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let th = theme();
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, label) in hints {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(th.crust)
                .bg(th.overlay2)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(th.subtext0),
        ));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Centering clamps to the available area.
    fn centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(100, 100, area), area);
    }

    #[test]
    /// What: Loaded values need no placeholder; failures carry their message.
    fn placeholders_follow_fetch_state() {
        assert!(fetch_placeholder(&Fetch::Loaded(()), "Loading...").is_none());
        assert_eq!(
            fetch_placeholder::<()>(&Fetch::Loading, "Loading...").map(|p| p.0),
            Some("Loading...".to_string())
        );
        assert_eq!(
            fetch_placeholder::<()>(&Fetch::Failed("boom".into()), "Loading...").map(|p| p.0),
            Some("boom".to_string())
        );
    }
}
