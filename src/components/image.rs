use crate::data::ImageRef;
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Labelled frame standing in for a photo
#[derive(Debug, Clone, Copy)]
pub struct ImagePlaceholder {
    image: ImageRef,
    highlighted: bool,
}

impl ImagePlaceholder {
    pub fn new(image: ImageRef) -> Self {
        Self {
            image,
            highlighted: false,
        }
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

impl Widget for ImagePlaceholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.highlighted {
                t.border_focused_style()
            } else {
                t.border_style()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(self.image.glyph()),
            Line::styled(self.image.label(), t.muted_style()),
        ];
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect {
            y: inner.y + top,
            height: inner.height.saturating_sub(top),
            ..inner
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);
    }
}

/// Circle-ish avatar: the initial in brackets, e.g. "(A)"
pub fn avatar(initial: char) -> Span<'static> {
    Span::styled(format!("({})", initial), theme().chip_style(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_shows_label() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        ImagePlaceholder::new(ImageRef::SantaMarta).render(area, &mut buf);
        let rows: Vec<String> = (0..5)
            .map(|y| (0..20).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect();
        assert!(rows.iter().any(|r| r.contains("Santa Marta")));
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar('M').content, "(M)");
    }
}
