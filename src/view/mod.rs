//! TUI rendering and terminal management (impure shell)

mod card_grid;
pub mod constants;
mod help;
mod layout;
mod region_select;
mod search_input;
mod styles;

pub use card_grid::{truncate_to_width, CardGrid, GridLayout};
pub use help::render_help_overlay;
pub use layout::{render_layout, status_text, LOADING_TEXT, LOAD_MORE_LABEL};
pub use region_select::RegionSelect;
pub use search_input::SearchInput;
pub use styles::{BrowserStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::source::{spawn_load, InputSource, LoadHandle};
use crate::state::query_input_handler::{
    clear_query, handle_backspace, handle_char_input, handle_cursor_left, handle_cursor_right,
};
use crate::state::{handle_scroll_action, AppState, FocusPane, GridViewport, SearchScope};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    /// In-flight load; `None` once the outcome has been committed.
    loader: Option<LoadHandle>,
    key_bindings: KeyBindings,
    styles: BrowserStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        loader: LoadHandle,
        styles: BrowserStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            loader: Some(loader),
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). The loader is drained on every
    /// tick, so its outcome is shown within one tick of arriving.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(100);

        let mut needs_draw = true;
        loop {
            if self.poll_loader() {
                needs_draw = true;
            }

            if needs_draw {
                self.draw()?;
                needs_draw = false;
            }

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        needs_draw = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        needs_draw = true;
                    }
                    _ => {}
                }
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Commit the load outcome if it has arrived.
    ///
    /// Returns true when state changed and a redraw is due.
    fn poll_loader(&mut self) -> bool {
        let Some(handle) = self.loader.as_mut() else {
            return false;
        };
        let Some(outcome) = handle.try_take() else {
            return false;
        };
        self.loader = None;
        self.app_state.apply_load_outcome(outcome)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Error and loading screens accept nothing but quit.
        if !self.app_state.is_ready() {
            return match self.key_bindings.get(key) {
                Some(action) if action.allowed_before_ready() => self.dispatch(action),
                _ => false,
            };
        }

        if self.app_state.help_visible {
            if key.code == KeyCode::Esc {
                self.app_state.help_visible = false;
                return false;
            }
            return match self.key_bindings.get(key) {
                Some(action @ (KeyAction::Help | KeyAction::Quit)) => self.dispatch(action),
                _ => false,
            };
        }

        if self.app_state.focus == FocusPane::Search {
            if let Some(action) = self.key_bindings.search_get(key) {
                return self.dispatch(action);
            }
            self.edit_query(key);
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// Apply a text-editing key to the query.
    fn edit_query(&mut self, key: KeyEvent) {
        let query = self.app_state.query.clone();
        let edited = match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                handle_char_input(query, ch)
            }
            KeyCode::Backspace => handle_backspace(query),
            KeyCode::Left => handle_cursor_left(query),
            KeyCode::Right => handle_cursor_right(query),
            _ => return,
        };
        self.app_state.set_query(edited);
    }

    /// Perform an action. Returns true if app should quit.
    fn dispatch(&mut self, action: KeyAction) -> bool {
        debug!(?action, "Dispatching key action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::StartSearch => self.app_state.focus_search(),
            KeyAction::FinishSearch => self.app_state.focus_grid(),
            KeyAction::ClearSearch => {
                let cleared = clear_query(self.app_state.query.clone());
                self.app_state.set_query(cleared);
            }
            KeyAction::NextRegion => self.app_state.next_region(),
            KeyAction::PrevRegion => self.app_state.prev_region(),
            KeyAction::LoadMore => self.app_state.load_more(),
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                let viewport = self.grid_viewport();
                handle_scroll_action(&mut self.app_state, action, viewport);
            }
        }
        false
    }

    /// Grid geometry for the current terminal size.
    fn grid_viewport(&self) -> GridViewport {
        let size = self.terminal.size().unwrap_or_default();
        let frame_area = Rect::new(0, 0, size.width, size.height);
        layout::grid_layout(frame_area, &self.app_state).viewport()
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let styles = self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, &self.app_state, &styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        loader: Option<LoadHandle>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            loader,
            key_bindings: KeyBindings::default(),
            styles: BrowserStyles::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Drain the loader as one event-loop tick would.
    pub(crate) fn poll_loader_test(&mut self) -> bool {
        self.poll_loader()
    }

    pub(crate) fn has_pending_load(&self) -> bool {
        self.loader.is_some()
    }

    /// Render a single frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of command-line arguments that shape the initial
/// `AppState`. CLI parsing happens in main.rs; this carries the result into
/// the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Query to start with (`--search`).
    pub initial_query: Option<String>,
    /// Region to select once the list is loaded (`--region`).
    pub initial_region: Option<String>,
    /// Fields the query is matched against.
    pub search_scope: SearchScope,
    /// Disable colors (`--no-color`).
    pub no_color: bool,
}

impl CliArgs {
    /// Initial state built from the arguments, in the Loading phase.
    pub fn initial_state(&self) -> AppState {
        let mut state = AppState::new(self.search_scope);
        if let Some(query) = &self.initial_query {
            state = state.with_initial_query(query.clone());
        }
        if let Some(region) = &self.initial_region {
            state = state.with_initial_region(region.clone());
        }
        state
    }
}

/// Initialize and run the TUI application with input source and args
///
/// Starts the background load, sets up the terminal, runs the event loop,
/// and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, args: CliArgs) -> Result<(), TuiError> {
    info!(source = %input_source.describe(), scope = ?args.search_scope, "Starting country browser");

    let app_state = args.initial_state();
    let styles = BrowserStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    let loader = spawn_load(input_source);

    let mut app = match TuiApp::new(app_state, loader, styles) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
