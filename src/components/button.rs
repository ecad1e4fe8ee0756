use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    /// Destructive action, e.g. deleting the account
    Danger,
    /// Borderless text link
    Link,
}

/// A bordered button. Disabled buttons are drawn dimmed and never focused.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    enabled: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            kind: ButtonKind::Primary,
            enabled: true,
            focused: false,
        }
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn style(&self) -> Style {
        let t = theme();
        if !self.enabled {
            return t.disabled_style();
        }
        let base = match self.kind {
            ButtonKind::Primary => t.title_style(),
            ButtonKind::Secondary => t.emphasis_style(),
            ButtonKind::Danger => t.error_style(),
            ButtonKind::Link => t.muted_style().add_modifier(Modifier::UNDERLINED),
        };
        if self.focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let style = self.style();
        let mut paragraph = Paragraph::new(Span::styled(format!(" {} ", self.label), style))
            .alignment(Alignment::Center);

        if self.kind != ButtonKind::Link {
            let border = if !self.enabled {
                t.disabled_style()
            } else if self.focused {
                t.border_focused_style()
            } else {
                t.border_style()
            };
            paragraph = paragraph.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            );
        }
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_uses_disabled_style() {
        let button = Button::new("Ingresar").enabled(false).focused(true);
        assert_eq!(button.style(), theme().disabled_style());
    }

    #[test]
    fn test_renders_label() {
        let area = Rect::new(0, 0, 16, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Ingresar").render(area, &mut buf);
        let row: String = (0..16).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("Ingresar"));
    }
}
