mod add_task;
mod confirm;
mod login;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Handle a key event in the current mode. The session gate is
/// re-evaluated after every handled key, so any handler that changes the
/// session flag triggers the redirect here rather than navigating itself.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Search => search::handle_search(app, key),
        Mode::AddTask => add_task::handle_add_task(app, key),
        Mode::Login => login::handle_login(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
        Mode::About => confirm::handle_about(app, key),
    }

    app.apply_gate();
}
