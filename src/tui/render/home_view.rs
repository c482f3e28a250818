use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the task list: search bar, section title, then one row per
/// visible task. The cursor row is highlighted; completed tasks render
/// dimmed and crossed out.
pub fn render_home_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height < 3 {
        return;
    }
    let bg = app.theme.background;

    // Search bar
    let search_area = Rect::new(area.x, area.y, area.width, 1);
    render_search_bar(frame, app, search_area);

    // Section title
    let title_area = Rect::new(area.x, area.y + 1, area.width, 1);
    let title = Paragraph::new(Line::from(Span::styled(
        " Today's Tasks",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(bg));
    frame.render_widget(title, title_area);

    // Task rows
    let list_area = Rect::new(area.x, area.y + 2, area.width, area.height - 2);
    let visible = app.visible_tasks();

    if visible.is_empty() {
        let empty_msg = if app.search_input.is_empty() {
            " No tasks yet. Press a to add one."
        } else {
            " No tasks match your search."
        };
        let msg = Paragraph::new(Span::styled(empty_msg, Style::default().fg(app.theme.dim).bg(bg)))
            .style(Style::default().bg(bg));
        frame.render_widget(msg, list_area);
        return;
    }

    // Keep the cursor row inside the window
    let rows = list_area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + rows {
        app.scroll_offset = app.cursor + 1 - rows;
    }

    for (row, (list_idx, &task_idx)) in visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(rows)
        .enumerate()
    {
        let task = &app.tasks[task_idx];
        let is_selected = list_idx == app.cursor;
        let row_bg = if is_selected { app.theme.selection_bg } else { bg };

        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let checkbox_style = Style::default()
            .fg(if task.completed { app.theme.accent } else { app.theme.text })
            .bg(row_bg);

        let text_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        };

        let tag = format!("#{}", task.category.label());
        let tag_style = Style::default()
            .fg(app.theme.category_color(task.category))
            .bg(row_bg);
        let time_style = Style::default().fg(app.theme.dim).bg(row_bg);

        // Right-align the time label; truncate the text to what remains
        let width = list_area.width as usize;
        let time_width = unicode::display_width(&task.time);
        let fixed = 2 + 4 + unicode::display_width(&tag) + 2 + time_width + 1;
        let text_budget = width.saturating_sub(fixed);
        let text = unicode::truncate_to_width(&task.text, text_budget);

        let mut spans = vec![
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(checkbox, checkbox_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(text, text_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(tag, tag_style),
        ];
        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let padding = width.saturating_sub(used + time_width + 1);
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(row_bg)));
        spans.push(Span::styled(task.time.clone(), time_style));
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        let row_area = Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1);
        let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(row_bg));
        frame.render_widget(widget, row_area);
    }
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = if app.mode == Mode::Search {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(app.theme.accent).bg(bg)),
            Span::styled(
                app.search_input.clone(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled("\u{258C}", Style::default().fg(app.theme.accent).bg(bg)),
        ])
    } else if !app.search_input.is_empty() {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled(
                app.search_input.clone(),
                Style::default().fg(app.theme.text).bg(bg),
            ),
        ])
    } else {
        Line::from(Span::styled(
            " Search for Tasks (/)",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };
    let widget = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(widget, area);
}
