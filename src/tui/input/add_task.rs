use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{AddField, App, Mode};

pub(super) fn handle_add_task(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.add_form.reset();
            app.mode = Mode::Navigate;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.add_form.focus = app.add_form.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.add_form.focus = app.add_form.focus.prev();
        }
        KeyCode::Enter => submit(app),
        KeyCode::Left if app.add_form.focus == AddField::Category => {
            app.add_form.category = app.add_form.category.prev();
        }
        KeyCode::Right if app.add_form.focus == AddField::Category => {
            app.add_form.category = app.add_form.category.next();
        }
        KeyCode::Backspace => {
            if let Some(edit) = focused_edit(app) {
                edit.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(edit) = focused_edit(app) {
                edit.delete();
            }
        }
        KeyCode::Left => {
            if let Some(edit) = focused_edit(app) {
                edit.left();
            }
        }
        KeyCode::Right => {
            if let Some(edit) = focused_edit(app) {
                edit.right();
            }
        }
        KeyCode::Home => {
            if let Some(edit) = focused_edit(app) {
                edit.home();
            }
        }
        KeyCode::End => {
            if let Some(edit) = focused_edit(app) {
                edit.end();
            }
        }
        KeyCode::Char(c) => {
            if let Some(edit) = focused_edit(app) {
                edit.insert(c);
            }
        }
        _ => {}
    }
}

fn focused_edit(app: &mut App) -> Option<&mut crate::tui::app::LineEdit> {
    match app.add_form.focus {
        AddField::Text => Some(&mut app.add_form.text),
        AddField::Time => Some(&mut app.add_form.time),
        AddField::Category => None,
    }
}

/// Submit the form. A trimmed-empty text or time silently no-ops and the
/// modal stays open; otherwise the task is appended, persisted, and the
/// form resets to defaults (category back to study).
fn submit(app: &mut App) {
    let text = app.add_form.text.buffer.clone();
    let time = app.add_form.time.buffer.clone();
    let category = app.add_form.category;

    if task_ops::add_task(&mut app.tasks, &text, &time, category).is_none() {
        return;
    }
    app.save_tasks();
    app.add_form.reset();
    app.mode = Mode::Navigate;
    app.clamp_cursor();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store;
    use crate::model::task::Category;
    use crate::ops::session_ops;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn app_in_add_modal(dir: &TempDir) -> App {
        let (mut s, _) = store::Store::open(&dir.path().join("store.json"));
        session_ops::login(&mut s, "a@b.c", "pw").unwrap();
        let log = crate::io::log::EventLog::new(dir.path());
        let mut app = crate::tui::app::App::new(s, log, crate::tui::theme::Theme::default());
        crate::tui::input::handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
        );
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        crate::tui::input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn submit_appends_persists_and_resets() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_add_modal(&dir);

        type_str(&mut app, "Read");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "9:00 am");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.add_form.category, Category::Personal);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks.len(), 5);
        let added = app.tasks.last().unwrap();
        assert_eq!(added.text, "Read");
        assert_eq!(added.time, "9:00 am");
        assert_eq!(added.category, Category::Personal);
        assert!(!added.completed);

        // Persisted value matches in-memory value
        assert_eq!(store::read_tasks(&app.store).unwrap().unwrap(), app.tasks);
        // Form is back to defaults
        assert!(app.add_form.text.buffer.is_empty());
        assert_eq!(app.add_form.category, Category::Study);
    }

    #[test]
    fn blank_fields_keep_the_modal_open() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_add_modal(&dir);

        type_str(&mut app, "Read");
        // Time left empty
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::AddTask);
        assert_eq!(app.tasks.len(), 4);
        assert_eq!(app.add_form.text.buffer, "Read");
    }

    #[test]
    fn esc_cancels_and_resets_the_form() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_add_modal(&dir);

        type_str(&mut app, "Read");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks.len(), 4);
        assert!(app.add_form.text.buffer.is_empty());
    }

    #[test]
    fn category_keys_only_cycle_when_category_focused() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_add_modal(&dir);

        type_str(&mut app, "ab");
        press(&mut app, KeyCode::Left);
        // Left moved the text cursor, not the category
        assert_eq!(app.add_form.category, Category::Study);
        type_str(&mut app, "X");
        assert_eq!(app.add_form.text.buffer, "aXb");
    }
}
