use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear};

use crate::tui::app::{App, LineEdit};
use crate::util::unicode;

/// A centered rect of the given size, clamped to the parent area
pub(super) fn centered_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);
    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Clear a popup area and fill it with the selection background
pub(super) fn clear_popup(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.selection_bg)),
        area,
    );
}

/// Spans for a single-line input field. When focused, a block cursor is
/// drawn at the edit position; `mask` replaces every grapheme with `●`.
pub(super) fn input_spans<'a>(
    app: &App,
    edit: &'a LineEdit,
    focused: bool,
    mask: bool,
    bg: ratatui::style::Color,
) -> Vec<Span<'a>> {
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default().fg(app.theme.accent).bg(bg);

    let (before, after): (String, String) = if mask {
        let total = unicode::grapheme_count(&edit.buffer);
        let before = unicode::grapheme_count(&edit.buffer[..edit.cursor]);
        ("\u{25CF}".repeat(before), "\u{25CF}".repeat(total - before))
    } else {
        (
            edit.buffer[..edit.cursor].to_string(),
            edit.buffer[edit.cursor..].to_string(),
        )
    };

    let mut spans = vec![Span::styled(before, text_style)];
    if focused {
        spans.push(Span::styled("\u{258C}", cursor_style));
    }
    spans.push(Span::styled(after, text_style));
    spans
}
