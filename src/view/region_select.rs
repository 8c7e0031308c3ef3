//! Region selector widget.

use crate::state::RegionFilter;
use crate::view::styles::BrowserStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Cyclable region selector showing the current label and position.
pub struct RegionSelect<'a> {
    filter: &'a RegionFilter,
    styles: &'a BrowserStyles,
}

impl<'a> RegionSelect<'a> {
    /// Selector showing the current choice of `filter`.
    pub fn new(filter: &'a RegionFilter, styles: &'a BrowserStyles) -> Self {
        Self { filter, styles }
    }
}

impl Widget for RegionSelect<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // "all" is position 0, then one per option.
        let position = self.filter.selected_index().map_or(0, |idx| idx + 1);
        let count = self.filter.options().len() + 1;

        let line = Line::from(vec![
            Span::raw(self.filter.label()),
            Span::styled(format!("  {}/{}", position + 1, count), self.styles.muted),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Region (r/R) ")
            .border_style(self.styles.card_border);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
