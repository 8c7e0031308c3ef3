//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.
//! Fixtures go through the real load path: `FileSource`, the worker thread
//! and `LoadHandle`, then the event loop's loader poll.

use crate::model::AppError;
use crate::source::{spawn_load, FileSource, InputSource, LoadHandle};
use crate::state::{AppState, SearchScope};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

const LOAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep comparisons compact.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

#[allow(dead_code)] // Not every helper is used by every acceptance module
impl AcceptanceTestHarness {
    /// Load a fixture with the default terminal size (80x24) and wait for
    /// the load to finish.
    pub fn from_fixture(path: &str) -> Result<Self, AppError> {
        Self::from_fixture_with_size(path, 80, 24)
    }

    /// Load a fixture with a custom terminal size and wait for the load.
    pub fn from_fixture_with_size(path: &str, width: u16, height: u16) -> Result<Self, AppError> {
        let source = InputSource::File(FileSource::new(path)?);
        let mut harness =
            Self::with_loader(AppState::new(SearchScope::All), spawn_load(source), width, height)?;
        harness.wait_for_load();
        Ok(harness)
    }

    /// Harness around an arbitrary state and in-flight load, without waiting.
    pub fn with_loader(
        app_state: AppState,
        loader: LoadHandle,
        width: u16,
        height: u16,
    ) -> Result<Self, AppError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            app: TuiApp::new_for_test(terminal, app_state, Some(loader)),
            running: true,
        })
    }

    /// Poll the loader like the event loop does until the outcome lands.
    ///
    /// # Panics
    /// Panics if the load does not finish within five seconds.
    pub fn wait_for_load(&mut self) {
        let started = Instant::now();
        while self.app.has_pending_load() {
            if self.app.poll_loader_test() {
                return;
            }
            assert!(
                started.elapsed() < LOAD_TIMEOUT,
                "load did not finish within {:?}",
                LOAD_TIMEOUT
            );
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text one character event at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running (has not quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return the buffer as text.
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Names of the countries on screen, in list order.
    pub fn visible_names(&self) -> Vec<String> {
        self.state()
            .visible()
            .iter()
            .filter_map(|country| country.name().map(str::to_string))
            .collect()
    }
}
