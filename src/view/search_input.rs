//! Search input widget for rendering the search bar.

use crate::state::QueryState;
use crate::view::styles::BrowserStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown in the empty, unfocused search box.
pub const SEARCH_PLACEHOLDER: &str = "Search for a country...";

/// Search box widget.
///
/// Draws the cursor only while focused; an empty unfocused box shows the
/// placeholder.
pub struct SearchInput<'a> {
    query: &'a QueryState,
    focused: bool,
    styles: &'a BrowserStyles,
}

impl<'a> SearchInput<'a> {
    /// Search box for `query`; the cursor is drawn only when `focused`.
    pub fn new(query: &'a QueryState, focused: bool, styles: &'a BrowserStyles) -> Self {
        Self {
            query,
            focused,
            styles,
        }
    }

    fn content(&self) -> Line<'static> {
        let text = self.query.as_str();

        if !self.focused {
            if text.is_empty() {
                return Line::from(Span::styled(SEARCH_PLACEHOLDER, self.styles.muted));
            }
            return Line::from(text.to_string());
        }

        // Split query into before/after cursor for rendering cursor
        let cursor = self.query.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut after = text.chars().skip(cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let rest: String = after.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, self.styles.cursor),
            Span::raw(rest),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.card_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search (/) ")
            .border_style(border_style);

        Paragraph::new(self.content()).block(block).render(area, buf);
    }
}
