use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::logic::{can_next, can_prev};
use crate::sources::image_url;
use crate::state::{Artwork, DetailState, Fetch, or_unknown};
use crate::theme::theme;
use crate::ui::helpers::fetch_placeholder;

/// What: Render the detail page: navigation bar, then the record's fields and image link.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Body area below the header
/// - `detail`: Detail state (record fetch plus optional navigation snapshot)
/// - `image_size`: Pixel width for the image URL
///
/// Details:
/// - Prev/Next are drawn dimmed when unavailable: at either end of the snapshot, or when the
///   page was opened directly without one.
pub fn render_detail(f: &mut Frame, area: Rect, detail: &DetailState, image_size: u32) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    f.render_widget(
        Paragraph::new(nav_line(detail)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        ),
        chunks[0],
    );

    let block = Block::default()
        .title(Span::styled(
            format!(" Artwork {} ", detail.record_id),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    let lines = match &detail.record {
        Fetch::Loaded(artwork) => record_lines(artwork, image_size),
        other => fetch_placeholder(other, "Loading...")
            .map(|(msg, color)| Line::from(Span::styled(msg, Style::default().fg(color))))
            .into_iter()
            .collect(),
    };
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(th.text))
            .wrap(Wrap { trim: false })
            .block(block),
        chunks[1],
    );
}

/// Back / Prev / position / Next bar.
fn nav_line(detail: &DetailState) -> Line<'static> {
    let th = theme();
    let nav = detail.nav.as_ref();
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.surface2)
        };
        Span::styled(label, style)
    };
    let mut spans = vec![
        Span::styled(
            "← Back",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        button("◀ Prev", can_prev(nav)),
        Span::raw("  "),
    ];
    if let Some(n) = nav {
        spans.push(Span::styled(
            n.position_label(),
            Style::default().fg(th.subtext0),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(button("Next ▶", can_next(nav)));
    Line::from(spans)
}

/// Title heading, every labelled field and the image URL.
fn record_lines(artwork: &Artwork, image_size: u32) -> Vec<Line<'static>> {
    let th = theme();
    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(
                format!("{label:<18}"),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value.replace('\n', " "), Style::default().fg(th.text)),
        ])
    };
    let mut lines = vec![
        Line::from(Span::styled(
            artwork.display_title().to_string(),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    let fields = [
        ("Artist", &artwork.artist_display),
        ("Date", &artwork.date_display),
        ("Origin", &artwork.place_of_origin),
        ("Medium", &artwork.medium_display),
        ("Dimensions", &artwork.dimensions),
        ("Credit Line", &artwork.credit_line),
        ("Reference Number", &artwork.main_reference_number),
        ("Type", &artwork.artwork_type_title),
        ("Style", &artwork.style_title),
        ("Classification", &artwork.classification_title),
        ("Department", &artwork.department_title),
    ];
    for (label, value) in fields {
        lines.push(field(label, or_unknown(value.as_ref())));
    }
    lines.push(field("Public Domain", artwork.public_domain_label()));
    lines.push(Line::raw(""));

    let url = image_url(artwork.image_id.as_deref(), image_size);
    if url.is_empty() {
        lines.push(Line::from(Span::styled(
            "No Image Available",
            Style::default().fg(th.overlay1),
        )));
    } else {
        lines.push(field("Image", &url));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NavContext, ViewKind};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(term: &Terminal<TestBackend>) -> String {
        term.backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    /// What: A loaded record shows its fields, placeholders and navigation position.
    ///
    /// - Input: Record with a title, no medium, not public domain; nav at 2 of 3
    /// - Output: Title, "Unknown", "Public Domain" "No", "2 of 3" and "No Image Available"
    fn renders_fields_and_position() {
        let detail = DetailState {
            record_id: 5,
            record: Fetch::Loaded(Artwork {
                id: 5,
                title: Some("The Bedroom".into()),
                artist_display: Some("Vincent van Gogh".into()),
                is_public_domain: Some(false),
                ..Artwork::default()
            }),
            nav: Some(NavContext {
                ids: vec![4, 5, 6],
                index: 1,
                source: ViewKind::List,
            }),
            return_to: ViewKind::List,
            latest_request_id: 1,
        };
        let mut term = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        term.draw(|f| render_detail(f, f.area(), &detail, 843))
            .expect("draw");
        let text = buffer_text(&term);
        assert!(text.contains("The Bedroom"));
        assert!(text.contains("Vincent van Gogh"));
        assert!(text.contains("2 of 3"));
        assert!(text.contains("Unknown"));
        assert!(text.contains("No Image Available"));
    }

    #[test]
    /// What: Failures render their message in place of the fields.
    fn renders_failure_message() {
        let detail = DetailState {
            record_id: 9,
            record: Fetch::Failed("Failed to load artwork.".into()),
            nav: None,
            return_to: ViewKind::Gallery,
            latest_request_id: 1,
        };
        let mut term = Terminal::new(TestBackend::new(80, 12)).expect("terminal");
        term.draw(|f| render_detail(f, f.area(), &detail, 843))
            .expect("draw");
        let text = buffer_text(&term);
        assert!(text.contains("Failed to load artwork."));
        assert!(!text.contains(" of "));
    }
}
