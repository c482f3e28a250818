use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, SETTINGS_MENU};

/// Render the settings view: the account menu and static app info
pub fn render_settings_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Account", title_style)));
    lines.push(Line::from(""));

    for (i, item) in SETTINGS_MENU.iter().enumerate() {
        let is_selected = i == app.settings_cursor;
        let row_bg = if is_selected { app.theme.selection_bg } else { bg };
        // Logout renders in red, like the original's destructive menu entry
        let fg = if i == 0 { app.theme.red } else { app.theme.text_bright };
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(*item, Style::default().fg(fg).bg(row_bg)),
            Span::styled(
                "  \u{203A}",
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" About", title_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  tempo v{}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(app.theme.text).bg(bg),
    )));
    lines.push(Line::from(Span::styled(
        "  A local task tracker",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    if let Some(alert) = &app.alert {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", alert),
            Style::default().fg(app.theme.red).bg(bg),
        )));
    }

    let widget = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(widget, area);
}
