//! Domain-level keyboard actions independent of key bindings.

/// User intents that key bindings map to.
///
/// These represent what the user wants, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Grid scrolling
    /// Scroll the card grid up one row. Default: k/↑
    ScrollUp,
    /// Scroll the card grid down one row. Default: j/↓
    ScrollDown,
    /// Scroll up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first row. Default: g/Home
    ScrollToTop,
    /// Jump to the last row. Default: G/End
    ScrollToBottom,

    // Search
    /// Focus the search box for typing. Default: / or Ctrl+f
    StartSearch,
    /// Leave the search box, keeping the query. Default: Enter/Esc while typing
    FinishSearch,
    /// Clear the query. Default: Ctrl+l
    ClearSearch,

    // Region filter
    /// Select the next region option. Default: r/]
    NextRegion,
    /// Select the previous region option. Default: R/[
    PrevRegion,

    // Pagination
    /// Grow the pagination window. Default: m/Space/Enter
    LoadMore,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Toggle the help overlay. Default: ?
    Help,
}

impl KeyAction {
    /// Whether the action is allowed before the country list is ready.
    ///
    /// Error and loading screens accept nothing but quit.
    pub fn allowed_before_ready(self) -> bool {
        matches!(self, KeyAction::Quit)
    }

    /// Whether the action scrolls the card grid.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
