//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal
//! backgrounds. Auto-detects via COLORFGBG env var, or manual override
//! with --light flag or AQ_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,
    /// Default border color
    pub border: Color,
    /// Section headers, accent text
    pub accent: Color,
    /// Positive (healthy hero, victory)
    pub good: Color,
    /// Negative (low health, defeat)
    pub bad: Color,

    // Map glyphs
    pub map_player: Color,
    pub map_monster: Color,
    pub map_treasure: Color,
    pub map_wall: Color,
    pub map_floor: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            accent: Color::Cyan,
            good: Color::Green,
            bad: Color::Red,
            map_player: Color::White,
            map_monster: Color::Red,
            map_treasure: Color::Yellow,
            map_wall: Color::Gray,
            map_floor: Color::DarkGray,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Blue,
            good: Color::Green,
            bad: Color::Red,
            map_player: Color::Black,
            map_monster: Color::Red,
            map_treasure: Color::Yellow,
            map_wall: Color::DarkGray,
            map_floor: Color::Gray,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and AQ_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("AQ_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15)
        // Light backgrounds typically have bg index >= 7 (excluding 8 which is bright black)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
