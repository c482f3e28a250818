use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, LoginField};

use super::helpers::{centered_rect, input_spans};

/// Render the login screen: centered title, the two input fields, and
/// the inline error line
pub fn render_login_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let form = &app.login_form;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Welcome Back",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Sign in to continue",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    let label_style = |focused: bool| {
        if focused {
            Style::default().fg(app.theme.accent).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        }
    };

    let email_focused = form.focused() == LoginField::Email;
    let mut email_line = vec![Span::styled("Email     ", label_style(email_focused))];
    email_line.extend(input_spans(app, &form.email, email_focused, false, bg));
    lines.push(Line::from(email_line));
    lines.push(Line::from(""));

    let password_focused = form.focused() == LoginField::Password;
    let mut password_line = vec![Span::styled("Password  ", label_style(password_focused))];
    password_line.extend(input_spans(app, &form.password, password_focused, true, bg));
    lines.push(Line::from(password_line));
    lines.push(Line::from(""));

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(app.theme.red).bg(bg),
        )));
    }

    let box_area = centered_rect(area, 44, lines.len() as u16);
    let widget = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(widget, box_area);
}
