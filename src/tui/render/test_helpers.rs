use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tempfile::TempDir;

use crate::io::log::EventLog;
use crate::io::store::Store;
use crate::ops::session_ops;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render the full app into an in-memory buffer and return plain text
/// (no styles), with trailing blanks trimmed.
pub fn render_to_string(app: &mut App, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A fresh app over an empty store (starts on the login view).
/// The TempDir must outlive the app.
pub fn fresh_app() -> (TempDir, App) {
    let dir = TempDir::new().unwrap();
    let (store, err) = Store::open(&dir.path().join("store.json"));
    assert!(err.is_none());
    let log = EventLog::new(dir.path());
    let app = App::new(store, log, Theme::default());
    (dir, app)
}

/// An app with a logged-in session (starts on home with the seeded tasks)
pub fn logged_in_app() -> (TempDir, App) {
    let dir = TempDir::new().unwrap();
    let (mut store, err) = Store::open(&dir.path().join("store.json"));
    assert!(err.is_none());
    session_ops::login(&mut store, "a@b.c", "pw").unwrap();
    let log = EventLog::new(dir.path());
    let app = App::new(store, log, Theme::default());
    (dir, app)
}
