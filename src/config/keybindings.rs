//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// These bindings apply while the card grid has focus. While the search box
/// has focus, printable keys are text and only the search-mode bindings
/// (`search_get`) are consulted.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
    search_bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the grid-mode action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Look up the action for a key event while typing in the search box.
    pub fn search_get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.search_bindings.get(&normalize(key)).copied()
    }
}

// Terminals report press/repeat kinds and lock-key state; bindings only
// care about code and modifiers.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

fn bind(map: &mut HashMap<KeyEvent, KeyAction>, code: KeyCode, mods: KeyModifiers, action: KeyAction) {
    map.insert(KeyEvent::new(code, mods), action);
}

impl Default for KeyBindings {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let ctrl = KeyModifiers::CONTROL;

        let mut bindings = HashMap::new();

        // Vim-style scrolling
        bind(&mut bindings, KeyCode::Char('j'), none, KeyAction::ScrollDown);
        bind(&mut bindings, KeyCode::Char('k'), none, KeyAction::ScrollUp);
        bind(&mut bindings, KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        bind(&mut bindings, KeyCode::Char('G'), shift, KeyAction::ScrollToBottom);

        // Arrow and navigation keys
        bind(&mut bindings, KeyCode::Down, none, KeyAction::ScrollDown);
        bind(&mut bindings, KeyCode::Up, none, KeyAction::ScrollUp);
        bind(&mut bindings, KeyCode::Home, none, KeyAction::ScrollToTop);
        bind(&mut bindings, KeyCode::End, none, KeyAction::ScrollToBottom);

        // Page navigation
        bind(&mut bindings, KeyCode::Char('d'), ctrl, KeyAction::PageDown);
        bind(&mut bindings, KeyCode::Char('u'), ctrl, KeyAction::PageUp);
        bind(&mut bindings, KeyCode::PageDown, none, KeyAction::PageDown);
        bind(&mut bindings, KeyCode::PageUp, none, KeyAction::PageUp);

        // Search
        bind(&mut bindings, KeyCode::Char('/'), none, KeyAction::StartSearch);
        bind(&mut bindings, KeyCode::Char('f'), ctrl, KeyAction::StartSearch);
        bind(&mut bindings, KeyCode::Char('l'), ctrl, KeyAction::ClearSearch);

        // Region filter
        bind(&mut bindings, KeyCode::Char('r'), none, KeyAction::NextRegion);
        bind(&mut bindings, KeyCode::Char(']'), none, KeyAction::NextRegion);
        bind(&mut bindings, KeyCode::Char('R'), shift, KeyAction::PrevRegion);
        bind(&mut bindings, KeyCode::Char('['), none, KeyAction::PrevRegion);

        // Pagination
        bind(&mut bindings, KeyCode::Char('m'), none, KeyAction::LoadMore);
        bind(&mut bindings, KeyCode::Char(' '), none, KeyAction::LoadMore);
        bind(&mut bindings, KeyCode::Enter, none, KeyAction::LoadMore);

        // Application controls
        bind(&mut bindings, KeyCode::Char('q'), none, KeyAction::Quit);
        bind(&mut bindings, KeyCode::Char('c'), ctrl, KeyAction::Quit);
        bind(&mut bindings, KeyCode::Char('?'), none, KeyAction::Help);

        let mut search_bindings = HashMap::new();
        bind(&mut search_bindings, KeyCode::Enter, none, KeyAction::FinishSearch);
        bind(&mut search_bindings, KeyCode::Esc, none, KeyAction::FinishSearch);
        bind(&mut search_bindings, KeyCode::Char('l'), ctrl, KeyAction::ClearSearch);
        bind(&mut search_bindings, KeyCode::Char('c'), ctrl, KeyAction::Quit);

        Self {
            bindings,
            search_bindings,
        }
    }
}
