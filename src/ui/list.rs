use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{Artwork, BrowseState, present};
use crate::theme::theme;
use crate::ui::helpers::{NO_MATCHES, fetch_placeholder, page_label, query_line};
use crate::util::truncate_to_width;

/// What: Render the list view: query input, sort/count status and the record rows.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Body area below the header
/// - `view`: List state; its `list_state` drives highlight and scrolling
pub fn render_list(f: &mut Frame, area: Rect, view: &mut BrowseState) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let search = Paragraph::new(query_line(view)).block(
        Block::default()
            .title(Span::styled(
                " Search ",
                Style::default().fg(th.overlay1),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.sapphire)),
    );
    f.render_widget(search, chunks[0]);

    let mut title_spans = vec![Span::styled(
        " Artworks ",
        Style::default().fg(th.overlay1),
    )];
    if let Some(sort) = view.sort {
        title_spans.push(Span::styled(
            format!("Sort: {} ({}) ", sort.field.label(), sort.order.label()),
            Style::default().fg(th.mauve),
        ));
    }
    let block = Block::default()
        .title(Line::from(title_spans))
        .title_bottom(Span::styled(
            format!(" {} ", page_label(view)),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    if let Some((msg, color)) = fetch_placeholder(&view.records, "Loading artworks...") {
        f.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(color))).block(block),
            chunks[1],
        );
        return;
    }
    if view.visible.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(NO_MATCHES, Style::default().fg(th.subtext0)))
                .block(block),
            chunks[1],
        );
        return;
    }

    let block = block.title(
        Line::from(Span::styled(
            format!(" Found {} artworks ", view.visible.len()),
            Style::default().fg(th.green),
        ))
        .right_aligned(),
    );
    let width = usize::from(chunks[1].width.saturating_sub(4));
    let items: Vec<ListItem> = view.visible.iter().map(|a| row(a, width)).collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut view.list_state);
}

/// Two-line row: bold title with an image marker, then attribution, date and origin.
fn row(artwork: &Artwork, width: usize) -> ListItem<'static> {
    let th = theme();
    let marker = if present(artwork.image_id.as_ref()).is_some() {
        Span::styled(" [img]", Style::default().fg(th.green))
    } else {
        Span::styled(" [no image]", Style::default().fg(th.overlay1))
    };
    let title = truncate_to_width(artwork.display_title(), width.saturating_sub(12));
    let artist = present(artwork.artist_display.as_ref())
        .map_or_else(|| "Unknown Artist".to_string(), |s| s.replace('\n', " "));
    let date = present(artwork.date_display.as_ref()).unwrap_or("Date unknown");
    let origin = present(artwork.place_of_origin.as_ref()).unwrap_or("Origin unknown");
    let meta = [artist.as_str(), date, origin];
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            marker,
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate_to_width(&meta.join(" · "), width.saturating_sub(2))),
            Style::default().fg(th.subtext0),
        )),
    ])
}
