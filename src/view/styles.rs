//! Styling for the browser screens.
//!
//! Every style is looked up through [`BrowserStyles`] so `--no-color` and
//! `NO_COLOR` reach all widgets.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Fixed setting, independent of the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::with_colors(true)
    }
}

// ===== BrowserStyles =====

/// Styles for the cards, controls and status screens.
///
/// With colors disabled only modifiers (bold, dim, reversed) remain, so
/// focus and emphasis are still visible on a monochrome terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStyles {
    /// Card title (country name).
    pub card_title: Style,
    /// Field labels on cards ("Region:", "Capital:", ...).
    pub card_label: Style,
    /// Card border.
    pub card_border: Style,
    /// Border of the widget that has keyboard focus.
    pub focused_border: Style,
    /// Error screen message.
    pub error: Style,
    /// Placeholder and secondary text.
    pub muted: Style,
    /// Key names in hints and the help overlay.
    pub key_hint: Style,
    /// Category headers in the help overlay.
    pub section_header: Style,
    /// Text cursor in the search box.
    pub cursor: Style,
}

impl BrowserStyles {
    /// Styles for `config`; no colors when they are turned off.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                card_title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                card_label: Style::default().fg(Color::Gray),
                card_border: Style::default().fg(Color::DarkGray),
                focused_border: Style::default().fg(Color::Yellow),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                key_hint: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                section_header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                card_title: Style::default().add_modifier(Modifier::BOLD),
                card_label: Style::default(),
                card_border: Style::default(),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                error: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default().add_modifier(Modifier::DIM),
                key_hint: Style::default().add_modifier(Modifier::BOLD),
                section_header: Style::default().add_modifier(Modifier::UNDERLINED),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }
}

impl Default for BrowserStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn color_config_respects_no_color_flag() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled(), "--no-color flag should disable colors");
    }

    #[test]
    #[serial(env)]
    fn color_config_no_color_env_any_value_disables() {
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR with empty string should disable colors"
        );
    }

    #[test]
    #[serial(env)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled(), "Colors should be enabled by default");
    }

    #[test]
    fn disabled_colors_set_no_foreground() {
        let styles = BrowserStyles::with_color_config(ColorConfig::with_colors(false));
        for style in [
            styles.card_title,
            styles.card_label,
            styles.card_border,
            styles.focused_border,
            styles.error,
            styles.muted,
            styles.key_hint,
            styles.section_header,
            styles.cursor,
        ] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }

    #[test]
    fn focus_is_distinguishable_without_colors() {
        let styles = BrowserStyles::with_color_config(ColorConfig::with_colors(false));
        assert_ne!(styles.focused_border, styles.card_border);
    }

    #[test]
    fn error_is_red_when_colors_enabled() {
        let styles = BrowserStyles::default();
        assert_eq!(styles.error.fg, Some(Color::Red));
    }
}
