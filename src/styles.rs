//! Theme and style system for Condor
//!
//! Provides the Condor palette (olive greens, earth browns) with light and
//! dark variants, plus a no-color mode for plain terminals.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

// Condor color tokens
const CONDOR_GREEN: Color = Color::Rgb(0x4F, 0x73, 0x36);
const CONDOR_DARK_GREEN: Color = Color::Rgb(0x2C, 0x4A, 0x3E);
const CONDOR_SOFT_GREEN: Color = Color::Rgb(0x8F, 0xA7, 0x7B);
const CONDOR_LIGHT_GREEN: Color = Color::Rgb(0xA1, 0xBE, 0x8F);
const CONDOR_BROWN: Color = Color::Rgb(0xB0, 0x89, 0x68);
const CONDOR_GRAY: Color = Color::Rgb(0x85, 0x85, 0x85);
const CONDOR_STAR: Color = Color::Rgb(0xC7, 0xB1, 0xA1);
const STAR_INACTIVE: Color = Color::Rgb(0xD9, 0xD9, 0xD9);
const CONDOR_RED: Color = Color::Rgb(0xE5, 0x39, 0x35);

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: CONDOR_SOFT_GREEN,
    secondary: CONDOR_BROWN,
    tertiary: CONDOR_LIGHT_GREEN,
    success: CONDOR_SOFT_GREEN,
    warning: Color::Yellow,
    error: Color::Rgb(0xFF, 0xB4, 0xAB),
    text: Color::White,
    text_muted: CONDOR_GRAY,
    text_emphasis: CONDOR_LIGHT_GREEN,
    border: Color::Rgb(0x44, 0x48, 0x3D),
    border_focused: CONDOR_SOFT_GREEN,
    highlight_bg: Color::Rgb(0x44, 0x48, 0x3D),
    background: Color::Reset,
    star: CONDOR_STAR,
    star_inactive: Color::Rgb(0x5A, 0x5A, 0x5A),
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    #[serde(alias = "no-color", alias = "no_color")]
    NoColor,
}

impl ThemeType {
    /// Swap light and dark. No-color stays no-color.
    pub fn toggled(self) -> Self {
        match self {
            ThemeType::Dark => ThemeType::Light,
            ThemeType::Light => ThemeType::Dark,
            ThemeType::NoColor => ThemeType::NoColor,
        }
    }
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    // === Primary Colors ===
    /// Main accent color (titles, primary buttons, selected chips)
    pub primary: Color,
    /// Secondary accent (secondary buttons, tips)
    pub secondary: Color,
    /// Tertiary accent (bottom bar, chips at rest)
    pub tertiary: Color,

    // === Semantic Colors ===
    pub success: Color,
    pub warning: Color,
    /// Destructive actions (delete account)
    pub error: Color,

    // === Text Colors ===
    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    // === UI Colors ===
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,

    // === Rating ===
    pub star: Color,
    pub star_inactive: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - soft greens on an olive-black terminal
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,

            primary: CONDOR_SOFT_GREEN,
            secondary: CONDOR_BROWN,
            tertiary: CONDOR_LIGHT_GREEN,

            success: CONDOR_SOFT_GREEN,
            warning: Color::Yellow,
            error: Color::Rgb(0xFF, 0xB4, 0xAB),

            text: Color::White,
            text_muted: CONDOR_GRAY,
            text_emphasis: CONDOR_LIGHT_GREEN,

            border: Color::Rgb(0x44, 0x48, 0x3D),
            border_focused: CONDOR_SOFT_GREEN,
            highlight_bg: Color::Rgb(0x44, 0x48, 0x3D),
            background: Color::Reset,

            star: CONDOR_STAR,
            star_inactive: Color::Rgb(0x5A, 0x5A, 0x5A),
        }
    }

    /// Light theme - deep greens for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,

            primary: CONDOR_GREEN,
            secondary: CONDOR_BROWN,
            tertiary: CONDOR_DARK_GREEN,

            success: CONDOR_GREEN,
            warning: Color::Rgb(180, 120, 0),
            error: CONDOR_RED,

            text: Color::Black,
            text_muted: CONDOR_GRAY,
            text_emphasis: CONDOR_DARK_GREEN,

            border: Color::Rgb(0xD0, 0xD0, 0xD0),
            border_focused: CONDOR_GREEN,
            highlight_bg: Color::Rgb(0xD9, 0xD2, 0xC7),
            background: Color::Reset,

            star: CONDOR_STAR,
            star_inactive: STAR_INACTIVE,
        }
    }

    /// No-color theme - for terminals where colors should be disabled
    ///
    /// Style helpers below avoid setting fg/bg in this mode so the UI uses the
    /// terminal defaults without emitting color codes.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            tertiary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
            star: Color::Reset,
            star_inactive: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text (locations, timestamps, handles)
    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn emphasis_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    pub fn success_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn error_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Style for list item highlight (selected row, selected card)
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for disabled buttons and inactive items
    pub fn disabled_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn background_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }

    /// Style for a filter chip
    pub fn chip_style(&self, selected: bool) -> Style {
        if self.is_plain() {
            return if selected {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
        }
        if selected {
            Style::default()
                .fg(Color::White)
                .bg(CONDOR_DARK_GREEN)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
        }
    }

    /// Style for a rating star
    pub fn star_style(&self, active: bool) -> Style {
        if self.is_plain() {
            return if active {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
        }
        Style::default().fg(if active { self.star } else { self.star_inactive })
    }
}
