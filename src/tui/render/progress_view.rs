use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Category;
use crate::tui::app::App;

/// Render the progress view: overall completion bar, totals, and the
/// per-category breakdown. The numbers come from `app.stats`, which is
/// recomputed every time this view gains focus.
pub fn render_progress_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = app.stats;
    let pct = stats.completion_percentage();

    let mut lines: Vec<Line> = Vec::new();
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(app.theme.text).bg(bg);
    let number_style = Style::default().fg(app.theme.accent).bg(bg);

    lines.push(Line::from(Span::styled(" Overall Progress", title_style)));
    lines.push(Line::from(""));

    // Progress bar: filled cells proportional to the percentage
    let bar_width = (area.width.saturating_sub(4) as usize).min(40);
    let filled = bar_width * pct as usize / 100;
    lines.push(Line::from(vec![
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(app.theme.progress_fill).bg(bg),
        ),
        Span::styled(
            "\u{2591}".repeat(bar_width - filled),
            Style::default().fg(app.theme.progress_empty).bg(bg),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(format!("{}% Complete", pct), label_style),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Task Statistics", title_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Total Tasks  ", label_style),
        Span::styled(stats.total.to_string(), number_style),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Completed    ", label_style),
        Span::styled(stats.completed.to_string(), number_style),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Category Breakdown", title_style)));
    lines.push(Line::from(""));
    for category in Category::ALL {
        let count = stats.category_count(category);
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                "\u{25CF} ",
                Style::default().fg(app.theme.category_color(category)).bg(bg),
            ),
            Span::styled(format!("{:<10}", capitalize(category.label())), label_style),
            Span::styled(count.to_string(), number_style),
        ]));
    }

    let widget = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(widget, area);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
