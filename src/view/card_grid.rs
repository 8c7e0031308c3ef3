//! Card grid: one bordered card per visible country.
//!
//! Cards are laid out left to right, top to bottom, in list order. The grid
//! scrolls in whole card rows starting at `AppState::grid_scroll`.

use crate::model::Country;
use crate::state::GridViewport;
use crate::view::constants::{CARD_HEIGHT, CARD_MIN_WIDTH};
use crate::view::styles::BrowserStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown in place of the grid when no country passes the filters.
pub const NO_MATCHES: &str = "No countries match the current filters.";

const ELLIPSIS: char = '…';

/// Cut `text` to at most `max_width` terminal columns.
///
/// Truncated text ends with `…`, which counts toward the width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Label/value pairs shown under the card title.
///
/// Missing fields render as an empty value.
pub fn card_details(country: &Country) -> [(&'static str, String); 4] {
    [
        ("population: ", country.population_text().unwrap_or_default()),
        ("Region: ", country.region().unwrap_or_default().to_string()),
        ("Capital: ", country.capital().unwrap_or_default().to_string()),
        ("Flag: ", country.flag_large().unwrap_or_default().to_string()),
    ]
}

/// Grid geometry for a given area and card count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Cards per row.
    pub columns: usize,
    /// Width of each card, borders included.
    pub card_width: u16,
    /// Complete card rows that fit in the area.
    pub visible_rows: usize,
    /// Rows needed for every card.
    pub total_rows: usize,
}

impl GridLayout {
    /// Fit `card_count` cards into `area`.
    pub fn compute(area: Rect, card_count: usize) -> Self {
        let columns = usize::from((area.width / CARD_MIN_WIDTH).max(1));
        // columns <= area.width, so the division fits back into u16.
        let card_width = area.width / columns as u16;
        let visible_rows = usize::from(area.height / CARD_HEIGHT);
        let total_rows = card_count.div_ceil(columns);
        Self {
            columns,
            card_width,
            visible_rows,
            total_rows,
        }
    }

    /// Row counts used to clamp scrolling.
    pub fn viewport(&self) -> GridViewport {
        GridViewport::new(self.visible_rows, self.total_rows)
    }
}

/// Render one card into `area`.
pub fn render_card(country: &Country, area: Rect, buf: &mut Buffer, styles: &BrowserStyles) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let title = truncate_to_width(country.name().unwrap_or_default(), inner_width);

    let lines: Vec<Line> = card_details(country)
        .into_iter()
        .map(|(label, value)| {
            let label = truncate_to_width(label, inner_width);
            let value = truncate_to_width(&value, inner_width.saturating_sub(label.width()));
            Line::from(vec![
                Span::styled(label, styles.card_label),
                Span::raw(value),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.card_border)
        .title(Span::styled(title, styles.card_title));

    Paragraph::new(lines).block(block).render(area, buf);
}

/// Widget drawing the visible page of countries as a card grid.
pub struct CardGrid<'a> {
    items: &'a [&'a Country],
    scroll: usize,
    styles: &'a BrowserStyles,
}

impl<'a> CardGrid<'a> {
    /// Grid over `items`, starting `scroll` card rows down.
    pub fn new(items: &'a [&'a Country], scroll: usize, styles: &'a BrowserStyles) -> Self {
        Self {
            items,
            scroll,
            styles,
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.items.is_empty() {
            Paragraph::new(Span::styled(NO_MATCHES, self.styles.muted)).render(area, buf);
            return;
        }

        let layout = GridLayout::compute(area, self.items.len());
        let first_row = self.scroll.min(layout.viewport().max_scroll());

        let rows = self
            .items
            .chunks(layout.columns)
            .skip(first_row)
            .take(layout.visible_rows);

        for (row_idx, row) in rows.enumerate() {
            // row_idx < visible_rows = area.height / CARD_HEIGHT
            let y = area.y + row_idx as u16 * CARD_HEIGHT;
            for (col_idx, country) in row.iter().enumerate() {
                let x = area.x + col_idx as u16 * layout.card_width;
                let card_area = Rect::new(x, y, layout.card_width, CARD_HEIGHT);
                render_card(country, card_area, buf, self.styles);
            }
        }
    }
}
