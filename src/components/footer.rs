use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render key hints in the form "Label: Key | Label: Key".
    ///
    /// Returns the height used (1 border line, 1 text line).
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme().border_style());

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(hint_line(text)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }
}

/// Style a hint string, labels in the accent color and keys emphasized
pub fn hint_line(text: &str) -> Line<'static> {
    let t = theme();
    let mut spans = Vec::new();

    for (i, part) in text.split(" | ").enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", t.muted_style()));
        }

        match part.split_once(": ") {
            Some((label, keys)) => {
                spans.push(Span::styled(format!("{}: ", label), t.muted_style()));
                spans.push(Span::styled(
                    keys.to_string(),
                    t.emphasis_style().add_modifier(Modifier::BOLD),
                ));
            }
            None => spans.push(Span::styled(part.to_string(), t.text_style())),
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_splits_labels_and_keys() {
        let line = hint_line("Abrir: Enter | Atrás: Esc");
        let content: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(content, vec!["Abrir: ", "Enter", " | ", "Atrás: ", "Esc"]);
    }

    #[test]
    fn test_hint_line_plain_text() {
        let line = hint_line("Cargando");
        assert_eq!(line.spans.len(), 1);
    }
}
