use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{App, Mode, SETTINGS_MENU, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Any key dismisses a pending alert
    app.alert = None;

    // Tab switching works from every main view
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            let next = match app.view {
                View::Home => View::Progress,
                View::Progress => View::Settings,
                _ => View::Home,
            };
            app.goto_view(next);
            return;
        }
        KeyCode::BackTab => {
            let prev = match app.view {
                View::Home => View::Settings,
                View::Progress => View::Home,
                _ => View::Progress,
            };
            app.goto_view(prev);
            return;
        }
        KeyCode::Char('1') => {
            app.goto_view(View::Home);
            return;
        }
        KeyCode::Char('2') => {
            app.goto_view(View::Progress);
            return;
        }
        KeyCode::Char('3') => {
            app.goto_view(View::Settings);
            return;
        }
        _ => {}
    }

    match app.view {
        View::Home => handle_home(app, key),
        View::Settings => handle_settings(app, key),
        // Progress is read-only; Login never reaches Navigate mode
        View::Progress | View::Login => {}
    }
}

fn handle_home(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            let count = app.visible_tasks().len();
            if count > 0 && app.cursor < count - 1 {
                app.cursor += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        // Toggle completion at the cursor
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.task_id_at_cursor() {
                if task_ops::toggle_completion(&mut app.tasks, &id) {
                    app.save_tasks();
                }
            }
        }
        // Delete at the cursor (immediate; only logout is confirmed)
        KeyCode::Char('d') => {
            if let Some(id) = app.task_id_at_cursor() {
                if task_ops::delete_task(&mut app.tasks, &id) {
                    app.save_tasks();
                    app.clamp_cursor();
                }
            }
        }
        KeyCode::Char('/') => {
            app.mode = Mode::Search;
        }
        KeyCode::Char('a') => {
            app.add_form.reset();
            app.mode = Mode::AddTask;
        }
        _ => {}
    }
}

fn handle_settings(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if app.settings_cursor + 1 < SETTINGS_MENU.len() {
                app.settings_cursor += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.settings_cursor = app.settings_cursor.saturating_sub(1);
        }
        KeyCode::Enter => match app.settings_cursor {
            0 => app.mode = Mode::Confirm,
            1 => app.mode = Mode::About,
            _ => {}
        },
        _ => {}
    }
}
