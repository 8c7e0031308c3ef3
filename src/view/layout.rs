//! Screen layout rendering.
//!
//! Pure layout logic: picks the screen for the load phase and splits the
//! ready screen into controls row, card grid and footer.

use crate::state::{AppState, FocusPane, LoadPhase};
use crate::view::card_grid::{CardGrid, GridLayout};
use crate::view::constants::{CONTROLS_HEIGHT, FOOTER_HEIGHT, SEARCH_WIDTH_PERCENT};
use crate::view::help::render_help_overlay;
use crate::view::region_select::RegionSelect;
use crate::view::search_input::SearchInput;
use crate::view::styles::BrowserStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Text of the loading screen.
pub const LOADING_TEXT: &str = "Loading...";

/// Label of the pagination control.
pub const LOAD_MORE_LABEL: &str = "Load more...";

/// Render the screen for the current load phase.
///
/// Priority is fixed: error, then loading, then the interactive browser.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &BrowserStyles) {
    let area = frame.area();
    match state.phase() {
        LoadPhase::Failed(message) => render_error(frame, area, message, styles),
        LoadPhase::Loading => render_loading(frame, area),
        LoadPhase::Ready(_) => {
            render_ready(frame, area, state, styles);
            if state.help_visible {
                render_help_overlay(frame, styles);
            }
        }
    }
}

/// Error screen: the message and nothing else.
fn render_error(frame: &mut Frame, area: Rect, message: &str, styles: &BrowserStyles) {
    let paragraph = Paragraph::new(Line::styled(message.to_string(), styles.error))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new(LOADING_TEXT), area);
}

/// Areas of the ready screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyAreas {
    /// Search box, left of the controls row.
    pub search: Rect,
    /// Region selector, right of the controls row.
    pub region: Rect,
    /// Card grid.
    pub grid: Rect,
    /// Status line.
    pub footer: Rect,
}

impl ReadyAreas {
    /// Split the full frame.
    pub fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CONTROLS_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(SEARCH_WIDTH_PERCENT),
                Constraint::Min(0),
            ])
            .split(rows[0]);

        Self {
            search: controls[0],
            region: controls[1],
            grid: rows[1],
            footer: rows[2],
        }
    }
}

/// Grid geometry for the ready screen in a frame of `frame_area`.
///
/// The shell uses this to clamp scrolling to what is actually drawn.
pub fn grid_layout(frame_area: Rect, state: &AppState) -> GridLayout {
    let areas = ReadyAreas::split(frame_area);
    GridLayout::compute(areas.grid, state.visible().len())
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, styles: &BrowserStyles) {
    let areas = ReadyAreas::split(area);

    frame.render_widget(
        SearchInput::new(&state.query, state.focus == FocusPane::Search, styles),
        areas.search,
    );
    frame.render_widget(RegionSelect::new(&state.region, styles), areas.region);

    let filtered = state.filtered();
    let visible = state.window.apply(&filtered);
    frame.render_widget(CardGrid::new(visible, state.grid_scroll, styles), areas.grid);

    let total = state.catalog().map_or(0, |catalog| catalog.len());
    render_footer(frame, areas.footer, visible.len(), filtered.len(), total, styles);
}

/// Counts shown in the footer.
pub fn status_text(shown: usize, matching: usize, total: usize) -> String {
    format!("Showing {} of {} matching ({} total)", shown, matching, total)
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    shown: usize,
    matching: usize,
    total: usize,
    styles: &BrowserStyles,
) {
    let load_more_style = if shown < matching {
        styles.key_hint
    } else {
        styles.muted
    };

    let line = Line::from(vec![
        Span::styled(format!("[m] {}", LOAD_MORE_LABEL), load_more_style),
        Span::raw("  "),
        Span::raw(status_text(shown, matching, total)),
        Span::styled("  ? help  q quit", styles.muted),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
