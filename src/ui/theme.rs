//! # Theme System
//!
//! Centralized colors for the dashboard. Rendering code references
//! [`Theme`] fields instead of hardcoding `ratatui::style::Color` values;
//! the active theme is chosen by name (config file or `--theme`).
//!
//! ## Built-in Themes
//!
//! - **Neon Lobster** (default) - the phosphor-green terminal look
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Tokyo Night** - dark theme inspired by Tokyo city lights

use crate::sim::LogCategory;
use ratatui::style::Color;

/// All colors used by the dashboard, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name used for lookup.
    pub name: &'static str,

    /// Main background color for panels and modals.
    pub bg: Color,
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (timestamps, hints, footer).
    pub fg_dim: Color,

    /// Primary accent: branding, active borders, selected cards.
    pub accent: Color,
    /// Secondary accent: captions, highlighted values.
    pub secondary: Color,

    /// Success / completed indicator.
    pub success: Color,
    /// Error / diagnostic indicator.
    pub error: Color,

    // -- Log category colors --
    pub scan: Color,
    pub learn: Color,
    pub trade: Color,
    pub block: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Neon Lobster).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The display color for a log category.
    pub fn category(&self, category: LogCategory) -> Color {
        match category {
            LogCategory::Scan => self.scan,
            LogCategory::Learn => self.learn,
            LogCategory::Trade => self.trade,
            LogCategory::Block => self.block,
        }
    }
}

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Neon Lobster (default)
    Theme {
        name: "Neon Lobster",
        bg: Color::Rgb(4, 10, 6),
        fg: Color::Rgb(198, 228, 204),
        fg_dim: Color::Rgb(68, 85, 68),
        accent: Color::Rgb(57, 255, 20), // neon green
        secondary: Color::Rgb(255, 122, 89), // lobster shell
        success: Color::Rgb(57, 255, 20),
        error: Color::Rgb(255, 82, 82),
        scan: Color::Rgb(102, 217, 239),
        learn: Color::Rgb(249, 226, 175),
        trade: Color::Rgb(57, 255, 20),
        block: Color::Rgb(255, 160, 67),
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(166, 227, 161),    // green
        secondary: Color::Rgb(250, 179, 135), // peach
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
        scan: Color::Rgb(137, 220, 235),      // sky
        learn: Color::Rgb(249, 226, 175),     // yellow
        trade: Color::Rgb(166, 227, 161),     // green
        block: Color::Rgb(250, 179, 135),     // peach
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(80, 250, 123), // green
        secondary: Color::Rgb(255, 121, 198), // pink
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        scan: Color::Rgb(139, 233, 253),
        learn: Color::Rgb(241, 250, 140),
        trade: Color::Rgb(80, 250, 123),
        block: Color::Rgb(255, 184, 108),
    },
    // 3 - Tokyo Night
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(115, 218, 202), // teal
        secondary: Color::Rgb(187, 154, 247), // purple
        success: Color::Rgb(115, 218, 202),
        error: Color::Rgb(247, 118, 142),
        scan: Color::Rgb(125, 207, 255),
        learn: Color::Rgb(224, 175, 104),
        trade: Color::Rgb(158, 206, 106),
        block: Color::Rgb(255, 158, 100),
    },
];
