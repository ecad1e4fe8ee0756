//! Text input widget for rendering [`TextInput`] instances.
//!
//! Bordered single-line field with:
//! - Cursor positioning when focused
//! - Placeholder text
//! - Password masking
//! - Disabled state

use crate::utils::text_input::TextInput;
use crate::utils::{
    disabled_border_style, disabled_text_style, focused_border_style, input_placeholder_style,
    input_text_style, unfocused_border_style,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Mask character for hidden passwords
const MASK: &str = "•";

/// A widget for rendering a [`TextInput`] with consistent styling.
///
/// # Example
/// ```
/// use condor::widgets::TextInputWidget;
/// use condor::utils::TextInput;
///
/// let input = TextInput::with_text("camilo@condor.co");
/// let widget = TextInputWidget::new(&input)
///     .title("Correo electrónico")
///     .placeholder("tu@correo.com")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    disabled: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            disabled: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether to mask the text (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Get the display text (actual text, masked text, or placeholder).
    fn display_text(&self) -> String {
        let text = self.input.text();

        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            MASK.repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        if self.disabled {
            disabled_text_style()
        } else if self.input.text().is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    fn border_style(&self) -> Style {
        if self.disabled {
            disabled_border_style()
        } else if self.focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }

        block
    }

    /// Cursor cell inside `area`, if the field is focused and enabled
    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled {
            return None;
        }
        let inner = self.create_block().inner(area);
        let cursor = self.input.cursor().min(self.input.text().chars().count());
        let x = inner.x + (cursor as u16).min(inner.width.saturating_sub(1));
        Some(Position::new(x, inner.y))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.display_text())
            .block(self.create_block())
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Extension trait for `Frame` to render a [`TextInputWidget`] with cursor support.
///
/// The Widget trait has no access to the Frame, so the cursor is placed here.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
