use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Search is a live filter over the rendered list only; the collection
/// and the store are never touched.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        // Accept: keep the filter active
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
        }
        // Cancel: drop the filter
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.clamp_cursor();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.clamp_cursor();
        }
        _ => {}
    }
}
