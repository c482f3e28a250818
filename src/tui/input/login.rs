use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::session_ops;
use crate::tui::app::App;

/// Key handling for the login screen. A successful submit only writes the
/// session state; the gate in `handle_key` performs the actual redirect.
pub(super) fn handle_login(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
            app.login_form.focus_password = !app.login_form.focus_password;
        }
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => {
            app.login_form.focused_edit().backspace();
            app.login_form.error = None;
        }
        KeyCode::Delete => app.login_form.focused_edit().delete(),
        KeyCode::Left => app.login_form.focused_edit().left(),
        KeyCode::Right => app.login_form.focused_edit().right(),
        KeyCode::Home => app.login_form.focused_edit().home(),
        KeyCode::End => app.login_form.focused_edit().end(),
        KeyCode::Char(c) => {
            app.login_form.focused_edit().insert(c);
            // Typing clears the inline error, as on the original screen
            app.login_form.error = None;
        }
        _ => {}
    }
}

fn submit(app: &mut App) {
    let email = app.login_form.email.buffer.clone();
    let password = app.login_form.password.buffer.clone();
    match session_ops::login(&mut app.store, &email, &password) {
        Ok(()) => {
            // The gate redirects to the main group after this handler
        }
        Err(e) => {
            if let session_ops::LoginError::Storage(ref source) = e {
                app.log.error("failed to persist login", source);
            }
            app.login_form.error = Some(e.to_string());
        }
    }
}
