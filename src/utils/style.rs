use crate::styles::theme;
use ratatui::prelude::*;

/// Get the border style for a focused field or card
pub fn focused_border_style() -> Style {
    theme().border_focused_style()
}

/// Get the border style for an unfocused field or card
pub fn unfocused_border_style() -> Style {
    theme().border_style()
}

pub fn disabled_border_style() -> Style {
    theme().disabled_style()
}

pub fn disabled_text_style() -> Style {
    theme().disabled_style()
}

/// Get the text style for placeholder text
pub fn input_placeholder_style() -> Style {
    theme().muted_style().add_modifier(Modifier::ITALIC)
}

/// Get the text style for normal input text
pub fn input_text_style() -> Style {
    theme().text_style()
}
