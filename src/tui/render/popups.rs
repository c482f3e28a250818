use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{centered_rect, clear_popup};

/// The logout confirmation popup (y confirms, n cancels)
pub fn render_logout_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(area, 40, 4);
    clear_popup(frame, app, popup);
    let bg = app.theme.selection_bg;

    let lines = vec![
        Line::from(Span::styled(
            " Logout",
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Are you sure you want to logout?",
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y", Style::default().fg(app.theme.red).bg(bg)),
            Span::styled(" logout   ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled("n", Style::default().fg(app.theme.text_bright).bg(bg)),
            Span::styled(" cancel", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
    ];

    let widget = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(widget, popup);
}

/// The about popup: static app metadata, any key dismisses
pub fn render_about_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(area, 36, 5);
    clear_popup(frame, app, popup);
    let bg = app.theme.selection_bg;

    let lines = vec![
        Line::from(Span::styled(
            " About",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" tempo v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::from(Span::styled(
            " A local task tracker",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        Line::from(Span::styled(
            " press any key to close",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let widget = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(widget, popup);
}
