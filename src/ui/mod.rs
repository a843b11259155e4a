//! TUI rendering for artsea.
//!
//! `ui` draws one frame: a header with the view tabs, the active screen's body,
//! a footer of key hints and any modal on top. Rendering only reads state,
//! except that the gallery records its grid width for row-wise navigation.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, Focus, Screen};
use crate::theme::theme;

mod detail;
mod gallery;
mod helpers;
mod list;
mod modals;

/// What: Render a full frame for the current state.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state (mutable for list scroll state and gallery columns)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, chunks[0], app.screen);
    match app.screen {
        Screen::List => list::render_list(f, chunks[1], &mut app.list),
        Screen::Gallery => {
            let size = app.settings.gallery_image_size;
            gallery::render_gallery(f, chunks[1], &mut app.gallery, size);
        }
        Screen::Detail => match &app.detail {
            Some(detail) => {
                detail::render_detail(f, chunks[1], detail, app.settings.detail_image_size);
            }
            None => f.render_widget(
                Paragraph::new(Span::styled(
                    "No artwork selected",
                    Style::default().fg(th.overlay1),
                )),
                chunks[1],
            ),
        },
    }

    let focus = match app.screen {
        Screen::Gallery => app.gallery.focus,
        _ => Focus::Search,
    };
    f.render_widget(
        Paragraph::new(helpers::hints_line(&helpers::key_hints(app.screen, focus))),
        chunks[2],
    );

    modals::render_modals(f, area, &app.modal);
}

/// App name and the List/Gallery tabs; the tab the detail page came from stays lit.
fn render_header(f: &mut Frame, area: Rect, screen: Screen) {
    let th = theme();
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(th.crust)
                    .bg(th.mauve)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(th.subtext0))
        }
    };
    let line = Line::from(vec![
        Span::styled(
            " Art Institute of Chicago ",
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        tab(" F2 List ", screen == Screen::List),
        Span::raw(" "),
        tab(" F3 Gallery ", screen == Screen::Gallery),
        Span::raw(" "),
        tab(" Artwork ", screen == Screen::Detail),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
