//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the controls row (search box and region selector), borders included.
pub const CONTROLS_HEIGHT: u16 = 3;

/// Width percentage of the controls row given to the search box.
pub const SEARCH_WIDTH_PERCENT: u16 = 60;

/// Height of the footer holding the "Load more..." control and status counts.
pub const FOOTER_HEIGHT: u16 = 1;

/// Minimum card width in columns, borders included.
///
/// The grid fits as many columns of at least this width as the terminal
/// allows and shares the leftover width between them.
pub const CARD_MIN_WIDTH: u16 = 28;

/// Card height in lines: top border, four detail lines, bottom border.
pub const CARD_HEIGHT: u16 = 6;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
