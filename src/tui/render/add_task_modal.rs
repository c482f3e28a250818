use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Category;
use crate::tui::app::{AddField, App};

use super::helpers::{centered_rect, clear_popup, input_spans};

/// Render the add-task modal over the home view
pub fn render_add_task_modal(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(area, 48, 9);
    clear_popup(frame, app, popup);
    let bg = app.theme.selection_bg;
    let form = &app.add_form;

    let label_style = |focused: bool| {
        if focused {
            Style::default().fg(app.theme.accent).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        }
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        " Add New Task",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let text_focused = form.focus == AddField::Text;
    let mut text_line = vec![Span::styled(" Task name  ", label_style(text_focused))];
    text_line.extend(input_spans(app, &form.text, text_focused, false, bg));
    lines.push(Line::from(text_line));
    lines.push(Line::from(""));

    let time_focused = form.focus == AddField::Time;
    let mut time_line = vec![Span::styled(" Time       ", label_style(time_focused))];
    time_line.extend(input_spans(app, &form.time, time_focused, false, bg));
    lines.push(Line::from(time_line));
    lines.push(Line::from(""));

    // Category selector: ‹ study work personal › with the current one lit
    let category_focused = form.focus == AddField::Category;
    let mut category_line = vec![Span::styled(" Category   ", label_style(category_focused))];
    for category in Category::ALL {
        let style = if category == form.category {
            Style::default()
                .fg(app.theme.category_color(category))
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        category_line.push(Span::styled(format!(" {} ", category.label()), style));
    }
    lines.push(Line::from(category_line));

    let widget = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(widget, popup);
}
