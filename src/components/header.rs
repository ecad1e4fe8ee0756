use crate::styles::theme;
use crate::widgets::CondorLogo;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Height of the standard header, borders included
pub const HEADER_HEIGHT: u16 = 3;

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render the brand on the left, the screen title centered, and an
    /// optional trailing hint (e.g. the notifications bell) on the right.
    ///
    /// Returns the height used.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        trailing: Option<&str>,
    ) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let logo = CondorLogo::small();
        let [brand, center, right] = Layout::horizontal([
            Constraint::Length(logo.width() + 2),
            Constraint::Min(0),
            Constraint::Length(logo.width() + 2),
        ])
        .areas(inner);

        frame.render_widget(logo, brand);
        frame.render_widget(
            Paragraph::new(title)
                .style(t.title_style())
                .alignment(Alignment::Center),
            center,
        );
        if let Some(trailing) = trailing {
            frame.render_widget(
                Paragraph::new(trailing)
                    .style(t.emphasis_style())
                    .alignment(Alignment::Right),
                right,
            );
        }

        Ok(HEADER_HEIGHT)
    }
}
