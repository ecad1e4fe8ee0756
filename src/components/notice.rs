use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Inline message with a dismiss hint, the terminal stand-in for a dialog
#[derive(Debug, Clone)]
pub struct NoticeBanner<'a> {
    message: &'a str,
    dismiss_hint: &'a str,
}

impl<'a> NoticeBanner<'a> {
    pub fn new(message: &'a str, dismiss_hint: &'a str) -> Self {
        Self {
            message,
            dismiss_hint,
        }
    }
}

impl Widget for NoticeBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(t.border_focused_style())
            .title(Line::styled(" Condor ", t.title_style()))
            .title_bottom(Line::styled(format!(" {} ", self.dismiss_hint), t.muted_style()).right_aligned());

        Paragraph::new(Line::styled(self.message, t.success_style()))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
