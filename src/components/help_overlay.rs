//! Help Overlay Component
//!
//! Displays current keybindings when the user presses '?'.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CATEGORY_ORDER: [&str; 5] = ["Global", "Navigation", "Selection", "Actions", "Text Editing"];

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 80, 90);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Atajos de teclado ({}) ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style())
            .style(t.background_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [bindings_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(inner_area);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer_text = format!(
            "Edita los atajos en: {}\n{}: cerrar",
            config_path,
            keymap.get_key_display_for_action(Action::Help)
        );
        frame.render_widget(
            Paragraph::new(footer_text)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            footer_area,
        );

        Ok(())
    }

    /// Bindings grouped by category, each key listed once
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = Vec::new();

        for category in CATEGORY_ORDER {
            let in_category: Vec<_> = bindings
                .iter()
                .filter(|b| b.action.category() == category)
                .collect();
            if in_category.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {} ", category),
                t.title_style().add_modifier(Modifier::UNDERLINED),
            )));
            for binding in in_category {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_lines_group_by_category() {
        let lines = HelpOverlay::binding_lines(&Keymap::default());
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let global = text.iter().position(|l| l.contains("Global"));
        let editing = text.iter().position(|l| l.contains("Text Editing"));
        assert!(global.is_some());
        assert!(global < editing);
        assert!(text.iter().any(|l| l.contains("Ctrl+S")));
    }
}
