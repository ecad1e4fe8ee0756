//! Layout helpers shared by every screen.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

const BOTTOM_BAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;

/// Areas of the frame around the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Screen content, header included
    pub body: Rect,
    /// Bottom navigation bar, zero height when the route hides it
    pub bottom_bar: Rect,
    pub footer: Rect,
}

/// Split the frame into the screen body, optional bottom bar and footer
pub fn create_standard_layout(area: Rect, bottom_bar: bool) -> ScreenLayout {
    let [body, bar, footer] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(if bottom_bar { BOTTOM_BAR_HEIGHT } else { 0 }),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    ScreenLayout {
        body,
        bottom_bar: bar,
        footer,
    }
}

/// Centered rectangle of the given percentage size, for popups
pub fn center_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

/// Centered column of at most `max_width` cells, used by the form screens
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Max(max_width)])
        .flex(Flex::Center)
        .areas(area);
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_hides_bottom_bar() {
        let layout = create_standard_layout(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.bottom_bar.height, 0);
        assert_eq!(layout.footer.height, 2);
        assert_eq!(layout.body.height, 22);
    }

    #[test]
    fn test_standard_layout_with_bottom_bar() {
        let layout = create_standard_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.bottom_bar.height, 3);
        assert_eq!(layout.bottom_bar.y, 19);
        assert_eq!(layout.body.height, 19);
    }

    #[test]
    fn test_center_popup_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = center_popup(area, 50, 40);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_column_caps_width() {
        let column = centered_column(Rect::new(0, 0, 120, 10), 60);
        assert_eq!(column.width, 60);
        assert_eq!(column.x, 30);
    }
}
