use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io;
use crate::io::log::EventLog;
use crate::io::store::{self, Store};
use crate::model::stats::Stats;
use crate::model::task::{Category, Task};
use crate::ops::session_ops::{self, RouteGroup};
use crate::ops::task_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Home,
    Progress,
    Settings,
}

impl View {
    /// The route group this view belongs to
    pub fn route_group(self) -> RouteGroup {
        match self {
            View::Login => RouteGroup::Auth,
            View::Home | View::Progress | View::Settings => RouteGroup::Main,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around lists and tabs
    Navigate,
    /// Typing a search query on the home view
    Search,
    /// The add-task modal form
    AddTask,
    /// Entering credentials on the login view
    Login,
    /// Logout confirmation (y/n)
    Confirm,
    /// The about popup
    About,
}

/// Single-line text input state
#[derive(Debug, Clone, Default)]
pub struct LineEdit {
    pub buffer: String,
    /// Byte offset of the cursor within `buffer`
    pub cursor: usize,
}

impl LineEdit {
    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = crate::util::unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = crate::util::unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(self.cursor..next);
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = crate::util::unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = crate::util::unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// Which login field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Login screen state
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: LineEdit,
    pub password: LineEdit,
    pub focus_password: bool,
    /// Inline error (validation or storage failure)
    pub error: Option<String>,
}

impl LoginForm {
    pub fn focused(&self) -> LoginField {
        if self.focus_password {
            LoginField::Password
        } else {
            LoginField::Email
        }
    }

    pub fn focused_edit(&mut self) -> &mut LineEdit {
        if self.focus_password {
            &mut self.password
        } else {
            &mut self.email
        }
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.focus_password = false;
        self.error = None;
    }
}

/// Which add-task field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Text,
    Time,
    Category,
}

impl AddField {
    pub fn next(self) -> AddField {
        match self {
            AddField::Text => AddField::Time,
            AddField::Time => AddField::Category,
            AddField::Category => AddField::Text,
        }
    }

    pub fn prev(self) -> AddField {
        match self {
            AddField::Text => AddField::Category,
            AddField::Time => AddField::Text,
            AddField::Category => AddField::Time,
        }
    }
}

/// Add-task modal state
#[derive(Debug)]
pub struct AddTaskForm {
    pub text: LineEdit,
    pub time: LineEdit,
    pub category: Category,
    pub focus: AddField,
}

impl Default for AddTaskForm {
    fn default() -> Self {
        AddTaskForm {
            text: LineEdit::default(),
            time: LineEdit::default(),
            category: Category::Study,
            focus: AddField::Text,
        }
    }
}

impl AddTaskForm {
    /// Back to defaults (text/time empty, category study)
    pub fn reset(&mut self) {
        *self = AddTaskForm::default();
    }
}

/// Items on the settings menu, in display order
pub const SETTINGS_MENU: [&str; 2] = ["Logout", "About"];

/// Main application state
pub struct App {
    pub store: Store,
    pub log: EventLog,
    pub theme: Theme,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    /// Authoritative in-memory task collection while the main group is active
    pub tasks: Vec<Task>,
    /// Cursor index into the filtered (visible) task list
    pub cursor: usize,
    /// Scroll offset for the task list
    pub scroll_offset: usize,
    /// Current search query (empty = no filter)
    pub search_input: String,
    pub login_form: LoginForm,
    pub add_form: AddTaskForm,
    /// Stats shown on the progress view, recomputed on focus
    pub stats: Stats,
    /// Cursor for the settings menu
    pub settings_cursor: usize,
    /// User-visible alert line (logout failure)
    pub alert: Option<String>,
}

impl App {
    pub fn new(store: Store, log: EventLog, theme: Theme) -> Self {
        let mut app = App {
            store,
            log,
            theme,
            view: View::Login,
            mode: Mode::Login,
            should_quit: false,
            tasks: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            search_input: String::new(),
            login_form: LoginForm::default(),
            add_form: AddTaskForm::default(),
            stats: Stats::default(),
            settings_cursor: 0,
            alert: None,
        };
        // Initial gate evaluation picks the starting route
        app.apply_gate();
        app
    }

    /// Re-evaluate the session gate and force the view when it disagrees.
    /// Called once at startup and after every handled key event.
    pub fn apply_gate(&mut self) {
        let logged_in = store::is_logged_in(&self.store);
        match session_ops::gate(logged_in, self.view.route_group()) {
            Some(RouteGroup::Auth) => {
                self.view = View::Login;
                self.mode = Mode::Login;
                self.login_form.reset();
            }
            Some(RouteGroup::Main) => {
                self.view = View::Home;
                self.mode = Mode::Navigate;
                self.search_input.clear();
                self.load_tasks();
            }
            None => {}
        }
    }

    /// Load the persisted collection, seeding the four defaults when the
    /// key is absent. The in-memory collection is replaced unconditionally.
    pub fn load_tasks(&mut self) {
        match store::read_tasks(&self.store) {
            Ok(Some(tasks)) => self.tasks = tasks,
            Ok(None) => {
                self.tasks = task_ops::default_tasks();
                if let Err(e) = store::write_tasks(&mut self.store, &self.tasks) {
                    self.log.error("failed to seed default tasks", &e);
                }
            }
            Err(e) => {
                // Read failure is swallowed; the screen shows an empty list
                self.log.error("failed to load tasks", &e);
                self.tasks = Vec::new();
            }
        }
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Persist the full collection after a mutation. Failures are logged
    /// and swallowed; the in-memory state stands.
    pub fn save_tasks(&mut self) {
        if let Err(e) = store::write_tasks(&mut self.store, &self.tasks) {
            self.log.error("failed to save tasks", &e);
        }
    }

    /// Recompute stats from the persisted collection. Runs every time the
    /// progress view gains focus; a read failure keeps the previous stats.
    pub fn refresh_stats(&mut self) {
        match store::read_tasks(&self.store) {
            Ok(Some(tasks)) => self.stats = Stats::compute(&tasks),
            Ok(None) => self.stats = Stats::default(),
            Err(e) => self.log.error("failed to load stats", &e),
        }
    }

    /// Switch between main tabs. Entering Progress is the focus event
    /// that triggers a stats refresh.
    pub fn goto_view(&mut self, view: View) {
        if view.route_group() != RouteGroup::Main || self.view.route_group() != RouteGroup::Main {
            return;
        }
        self.view = view;
        if view == View::Progress {
            self.refresh_stats();
        }
    }

    /// Indices of tasks visible under the current search filter
    pub fn visible_tasks(&self) -> Vec<usize> {
        task_ops::filter_tasks(&self.tasks, &self.search_input)
    }

    /// Task ID at the current cursor position, honoring the filter
    pub fn task_id_at_cursor(&self) -> Option<String> {
        let visible = self.visible_tasks();
        let idx = *visible.get(self.cursor)?;
        Some(self.tasks[idx].id.clone())
    }

    /// Keep the cursor inside the visible list after a mutation or filter change
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }
}

/// Run the TUI application against the given data directory
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(data_dir)?;
    let log = EventLog::new(data_dir);

    let (store, open_err) = Store::open(&data_dir.join("store.json"));
    if let Some(e) = open_err {
        log.error("failed to load store, starting empty", &e);
    }

    let theme = match config_io::read_config(data_dir) {
        Ok(config) => Theme::from_config(&config.ui),
        Err(e) => {
            log.error("failed to read config, using defaults", &e);
            Theme::default()
        }
    };

    let mut app = App::new(store, log, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
