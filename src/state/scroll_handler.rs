//! Vertical scrolling of the card grid.
//!
//! Pure function that transforms AppState in response to scroll actions.
//! The grid is scrolled in whole card rows.

use crate::model::KeyAction;
use crate::state::AppState;

/// Grid geometry needed to clamp scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridViewport {
    /// Card rows that fit on screen.
    pub visible_rows: usize,
    /// Card rows needed for the current page of results.
    pub total_rows: usize,
}

impl GridViewport {
    /// Viewport of `visible_rows` on screen out of `total_rows`.
    pub fn new(visible_rows: usize, total_rows: usize) -> Self {
        Self {
            visible_rows,
            total_rows,
        }
    }

    /// Largest first-row offset that still fills the screen.
    pub fn max_scroll(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows.max(1))
    }
}

/// Apply a scroll action to `state.grid_scroll`, clamped to the viewport.
///
/// Non-scroll actions are ignored.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction, viewport: GridViewport) {
    let page = viewport.visible_rows.max(1);
    let current = state.grid_scroll.min(viewport.max_scroll());

    let next = match action {
        KeyAction::ScrollUp => current.saturating_sub(1),
        KeyAction::ScrollDown => current.saturating_add(1),
        KeyAction::PageUp => current.saturating_sub(page),
        KeyAction::PageDown => current.saturating_add(page),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => viewport.max_scroll(),
        _ => return,
    };

    state.grid_scroll = next.min(viewport.max_scroll());
}
