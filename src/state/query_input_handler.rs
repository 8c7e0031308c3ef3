//! Query input handling (pure state transitions).
//!
//! The query is applied on every keystroke; there is no submit step.
//! All functions are pure - no side effects, testable without TUI.

/// Text of the search box plus the cursor position.
///
/// `cursor` counts characters, not bytes, so multi-byte input edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    text: String,
    cursor: usize,
}

impl QueryState {
    /// Query with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Query text as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(mut state: QueryState, ch: char) -> QueryState {
    let offset = state.byte_offset(state.cursor);
    state.text.insert(offset, ch);
    state.cursor += 1;
    state
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut state: QueryState) -> QueryState {
    if state.cursor == 0 {
        return state;
    }
    let offset = state.byte_offset(state.cursor - 1);
    state.text.remove(offset);
    state.cursor -= 1;
    state
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut state: QueryState) -> QueryState {
    state.cursor = state.cursor.saturating_sub(1);
    state
}

/// Move cursor right by one position. Saturates at the query length.
pub fn handle_cursor_right(mut state: QueryState) -> QueryState {
    state.cursor = (state.cursor + 1).min(state.char_len());
    state
}

/// Empty the query.
pub fn clear_query(_state: QueryState) -> QueryState {
    QueryState::default()
}
