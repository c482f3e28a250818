use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

/// Render the status row (bottom of screen): key hints for the current
/// mode, or the pending alert
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if let Some(alert) = &app.alert {
        let line = Line::from(Span::styled(
            format!(" {}", alert),
            Style::default().fg(app.theme.red).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let hint = match app.mode {
        Mode::Navigate => match app.view {
            View::Home => " space toggle  a add  d delete  / search  tab views  q quit",
            View::Settings => " \u{2191}\u{2193} move  enter select  tab views  q quit",
            _ => " tab views  q quit",
        },
        Mode::Search => " type to filter  enter accept  esc clear",
        Mode::AddTask => " tab next field  \u{2190}\u{2192} category  enter add  esc cancel",
        Mode::Login => " tab switch field  enter login",
        Mode::Confirm => " y logout  n cancel",
        Mode::About => " any key to close",
    };

    let line = Line::from(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
