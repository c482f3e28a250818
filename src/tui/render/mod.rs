pub mod add_task_modal;
pub mod helpers;
pub mod home_view;
pub mod login_view;
pub mod popups;
pub mod progress_view;
pub mod settings_view;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode, View};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    if app.view == View::Login {
        // Login has no tab bar: content | status row
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        login_view::render_login_view(frame, app, chunks[0]);
        status_row::render_status_row(frame, app, chunks[1]);
        return;
    }

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.view {
        View::Home => home_view::render_home_view(frame, app, chunks[1]),
        View::Progress => progress_view::render_progress_view(frame, app, chunks[1]),
        View::Settings => settings_view::render_settings_view(frame, app, chunks[1]),
        View::Login => unreachable!("handled above"),
    }

    // Modal overlays
    match app.mode {
        Mode::AddTask => add_task_modal::render_add_task_modal(frame, app, chunks[1]),
        Mode::Confirm => popups::render_logout_confirm(frame, app, frame.area()),
        Mode::About => popups::render_about_popup(frame, app, frame.area()),
        _ => {}
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
