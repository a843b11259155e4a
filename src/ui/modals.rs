use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::Modal;
use crate::theme::theme;
use crate::ui::helpers::centered_rect;

/// Render the active modal, if any, centered over `area`.
pub fn render_modals(f: &mut Frame, area: Rect, modal: &Modal) {
    match modal {
        Modal::None => {}
        Modal::Help => render_box(f, area, "Help", help_lines(), 64, 26),
        Modal::Alert { message } => {
            let th = theme();
            let lines = vec![
                Line::from(Span::styled(message.clone(), Style::default().fg(th.text))),
                Line::raw(""),
                Line::from(Span::styled(
                    "Press Enter to close",
                    Style::default().fg(th.overlay1),
                )),
            ];
            render_box(f, area, "Alert", lines, 56, 7);
        }
    }
}

/// What: Draw a double-bordered modal box with a bold title.
///
/// Details:
/// - Clears the area underneath first so the background does not bleed through.
fn render_box(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>, w: u16, h: u16) {
    let th = theme();
    let rect = centered_rect(w, h, area);
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.crust))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.crust)),
        );
    f.render_widget(boxw, rect);
}

/// Key reference grouped by screen.
fn help_lines() -> Vec<Line<'static>> {
    let th = theme();
    let heading = |s: &'static str| {
        Line::from(Span::styled(
            s,
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |k: &'static str, d: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<14}"), Style::default().fg(th.yellow)),
            Span::styled(d, Style::default().fg(th.text)),
        ])
    };
    vec![
        heading("Global"),
        entry("F2 / F3", "List / Gallery view"),
        entry("F1", "Toggle this help"),
        entry("Ctrl+C", "Quit"),
        heading("List and Gallery"),
        entry("type", "Filter loaded records"),
        entry("Ctrl+U", "Clear the filter"),
        entry("Ctrl+R", "Search the collection"),
        entry("Enter", "Open artwork"),
        entry("PgUp / PgDn", "Previous / next page"),
        heading("List"),
        entry("Shift+Tab", "Cycle sort field"),
        entry("Ctrl+O", "Flip sort order"),
        heading("Gallery"),
        entry("Tab", "Switch search / filters"),
        entry("Space", "Toggle filter value"),
        entry("Ctrl+X", "Clear filters and query"),
        heading("Artwork"),
        entry("← / →", "Previous / next artwork"),
        entry("Esc", "Back"),
        entry("o", "Open image"),
        entry("r", "Reload"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    /// What: Alerts render their message inside a titled box.
    fn alert_renders_message() {
        let mut term = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
        let modal = Modal::Alert {
            message: "No Image Available".into(),
        };
        term.draw(|f| render_modals(f, f.area(), &modal))
            .expect("draw");
        let text: String = term
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Alert"));
        assert!(text.contains("No Image Available"));
    }
}
