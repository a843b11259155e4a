use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::events::filter_entries;
use crate::sources::image_url;
use crate::state::{Artwork, BrowseState, FilterGroup, Focus, or_unknown};
use crate::theme::theme;
use crate::ui::helpers::{NO_MATCHES, fetch_placeholder, page_label, query_line};
use crate::util::truncate_to_width;

/// Minimum card width in columns, borders included.
const CARD_MIN_WIDTH: u16 = 30;
/// Card height in rows, borders included.
const CARD_HEIGHT: u16 = 6;
/// Width of the filter panel.
const FILTER_PANEL_WIDTH: u16 = 34;

/// What: Render the gallery: filter panel on the left, query and card grid on the right.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Body area below the header
/// - `view`: Gallery state; `columns` is updated to the rendered grid width
/// - `image_size`: Pixel width for the card image URLs
///
/// Details:
/// - The grid scrolls by whole rows so the selected card is always visible.
pub fn render_gallery(f: &mut Frame, area: Rect, view: &mut BrowseState, image_size: u32) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FILTER_PANEL_WIDTH), Constraint::Min(20)])
        .split(area);
    render_filters(f, cols[0], view);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(cols[1]);
    let search = Paragraph::new(query_line(view)).block(
        Block::default()
            .title(Span::styled(" Search ", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if view.focus == Focus::Search {
                th.sapphire
            } else {
                th.surface2
            })),
    );
    f.render_widget(search, right[0]);

    let block = Block::default()
        .title(Span::styled(" Gallery ", Style::default().fg(th.overlay1)))
        .title_bottom(Span::styled(
            format!(" {} ", page_label(view)),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    if let Some((msg, color)) = fetch_placeholder(&view.records, "Loading gallery...") {
        f.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(color))).block(block),
            right[1],
        );
        return;
    }
    let block = block.title(
        Line::from(Span::styled(
            format!(" Showing {} of {} ", view.visible.len(), view.loaded_len()),
            Style::default().fg(th.green),
        ))
        .right_aligned(),
    );
    let inner = block.inner(right[1]);
    f.render_widget(block, right[1]);
    if view.visible.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(NO_MATCHES, Style::default().fg(th.subtext0))),
            inner,
        );
        return;
    }

    let columns = usize::from((inner.width / CARD_MIN_WIDTH).max(1));
    view.columns = columns;
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let selected_row = view.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let card_w = inner.width / u16::try_from(columns).unwrap_or(1);

    for (row_offset, chunk) in view
        .visible
        .chunks(columns)
        .skip(first_row)
        .take(visible_rows)
        .enumerate()
    {
        let row_index = first_row + row_offset;
        let y = inner.y + u16::try_from(row_offset).unwrap_or(0) * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        for (col, artwork) in chunk.iter().enumerate() {
            let x = inner.x + u16::try_from(col).unwrap_or(0) * card_w;
            let rect = Rect::new(x, y, card_w, CARD_HEIGHT);
            let selected = row_index * columns + col == view.selected;
            render_card(f, rect, artwork, selected, image_size);
        }
    }
}

/// One card: title in the border, attribution, date and image state inside.
fn render_card(f: &mut Frame, rect: Rect, artwork: &Artwork, selected: bool, image_size: u32) {
    let th = theme();
    let width = usize::from(rect.width.saturating_sub(2));
    let (border, border_type) = if selected {
        (th.lavender, BorderType::Thick)
    } else {
        (th.surface2, BorderType::Rounded)
    };
    let url = image_url(artwork.image_id.as_deref(), image_size);
    let image = if url.is_empty() {
        Span::styled("No Image", Style::default().fg(th.overlay1))
    } else {
        Span::styled(
            truncate_to_width(&url, width),
            Style::default().fg(th.sapphire),
        )
    };
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(
                &or_unknown(artwork.artist_display.as_ref()).replace('\n', " "),
                width,
            ),
            Style::default().fg(th.subtext0),
        )),
        Line::from(Span::styled(
            truncate_to_width(or_unknown(artwork.date_display.as_ref()), width),
            Style::default().fg(th.overlay2),
        )),
        Line::from(Span::styled(
            truncate_to_width(or_unknown(artwork.classification_title.as_ref()), width),
            Style::default().fg(th.mauve),
        )),
        Line::from(image),
    ];
    let title_style = if selected {
        Style::default().fg(th.lavender).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.text).add_modifier(Modifier::BOLD)
    };
    let card = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                truncate_to_width(artwork.display_title(), width),
                title_style,
            ))
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(card, rect);
}

/// What: Render the filter panel: each group's values with a toggle mark.
///
/// Details:
/// - The cursor is highlighted only while the panel has focus; the panel scrolls to keep it
///   on screen.
fn render_filters(f: &mut Frame, area: Rect, view: &BrowseState) {
    let th = theme();
    let focused = view.focus == Focus::Filters;
    let entries = filter_entries(view);
    let width = usize::from(area.width.saturating_sub(8));

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;
    let mut last_group: Option<FilterGroup> = None;
    for (i, (group, value)) in entries.iter().enumerate() {
        if last_group != Some(*group) {
            if last_group.is_some() {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(
                group.label(),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            )));
            last_group = Some(*group);
        }
        let mark = if view.filters.is_selected(*group, value) {
            "[x] "
        } else {
            "[ ] "
        };
        let style = if focused && i == view.filter_cursor {
            cursor_line = lines.len();
            Style::default().fg(th.crust).bg(th.lavender)
        } else if view.filters.is_selected(*group, value) {
            Style::default().fg(th.green)
        } else {
            Style::default().fg(th.text)
        };
        lines.push(Line::from(Span::styled(
            format!("{mark}{}", truncate_to_width(value, width)),
            style,
        )));
    }
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "No filters available",
            Style::default().fg(th.overlay1),
        )));
    }

    let inner_h = usize::from(area.height.saturating_sub(2)).max(1);
    let scroll = u16::try_from(cursor_line.saturating_sub(inner_h - 1)).unwrap_or(0);
    let panel = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .title(Span::styled(" Filters ", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface2 })),
    );
    f.render_widget(panel, area);
}
