use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::session_ops;
use crate::tui::app::{App, Mode};

/// Logout confirmation: `y` confirms, `n`/Esc cancels.
/// This is the one place a storage failure surfaces to the user.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') => {
            app.mode = Mode::Navigate;
            match session_ops::logout(&mut app.store) {
                Ok(()) => {
                    // The session flag is gone; the gate redirects to login
                }
                Err(e) => {
                    app.log.error("failed to logout", &e);
                    app.alert = Some("Failed to logout. Please try again.".to_string());
                }
            }
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

/// The about popup: informational only, any key dismisses it
pub(super) fn handle_about(app: &mut App, _key: KeyEvent) {
    app.mode = Mode::Navigate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store;
    use crate::tui::app::View;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn app_in_confirm(dir: &TempDir) -> App {
        let (mut s, _) = store::Store::open(&dir.path().join("store.json"));
        session_ops::login(&mut s, "a@b.c", "pw").unwrap();
        let log = crate::io::log::EventLog::new(dir.path());
        let mut app = crate::tui::app::App::new(s, log, crate::tui::theme::Theme::default());
        app.goto_view(View::Settings);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Confirm);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        crate::tui::input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn confirmed_logout_clears_session_and_redirects() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_confirm(&dir);
        press(&mut app, KeyCode::Char('y'));

        assert!(!store::is_logged_in(&app.store));
        assert!(store::read_credentials(&app.store).is_none());
        assert_eq!(app.view, View::Login);
        assert_eq!(app.mode, Mode::Login);
    }

    #[test]
    fn cancel_keeps_session_and_view() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_confirm(&dir);
        press(&mut app, KeyCode::Char('n'));

        assert!(store::is_logged_in(&app.store));
        assert_eq!(app.view, View::Settings);
        assert_eq!(app.mode, Mode::Navigate);

        // Esc cancels too
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(store::is_logged_in(&app.store));
    }

    #[test]
    fn failed_logout_keeps_session_and_shows_alert() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir(&data).unwrap();
        let (mut s, _) = store::Store::open(&data.join("store.json"));
        session_ops::login(&mut s, "a@b.c", "pw").unwrap();
        let log = crate::io::log::EventLog::new(dir.path());
        let mut app = crate::tui::app::App::new(s, log, crate::tui::theme::Theme::default());
        app.goto_view(View::Settings);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Confirm);

        // Deleting the data directory makes the logout write fail
        std::fs::remove_dir_all(&data).unwrap();
        press(&mut app, KeyCode::Char('y'));

        // Session stands, no redirect, alert surfaced
        assert!(store::is_logged_in(&app.store));
        assert_eq!(app.view, View::Settings);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(
            app.alert.as_deref(),
            Some("Failed to logout. Please try again.")
        );
    }

    #[test]
    fn other_keys_are_ignored_while_confirming() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in_confirm(&dir);
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.mode, Mode::Confirm);
        assert!(store::is_logged_in(&app.store));
    }

    #[test]
    fn about_popup_dismisses_on_any_key() {
        let dir = TempDir::new().unwrap();
        let (mut s, _) = store::Store::open(&dir.path().join("store.json"));
        session_ops::login(&mut s, "a@b.c", "pw").unwrap();
        let log = crate::io::log::EventLog::new(dir.path());
        let mut app = crate::tui::app::App::new(s, log, crate::tui::theme::Theme::default());
        app.goto_view(View::Settings);
        app.settings_cursor = 1;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::About);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.view, View::Settings);
    }
}
