use crate::nav::Route;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Destinations reachable from the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomTab {
    Home,
    Explore,
    Profile,
}

impl BottomTab {
    pub const ALL: [BottomTab; 3] = [BottomTab::Home, BottomTab::Explore, BottomTab::Profile];

    pub fn route(&self) -> Route {
        match self {
            BottomTab::Home => Route::Home,
            BottomTab::Explore => Route::Explore,
            BottomTab::Profile => Route::Profile,
        }
    }

    /// Tab highlighted for a route; none for screens outside the bar
    pub fn for_route(route: &Route) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.route() == *route)
    }

    fn label(&self) -> &'static str {
        match self {
            BottomTab::Home => "⌂ Inicio",
            BottomTab::Explore => "◎ Explorar",
            BottomTab::Profile => "☺ Perfil",
        }
    }
}

pub struct BottomBar;

impl BottomBar {
    /// Render the three tabs with their number shortcuts
    pub fn render(frame: &mut Frame, area: Rect, route: &Route) -> Result<()> {
        if area.height == 0 {
            return Ok(());
        }
        let t = theme();
        let active = BottomTab::for_route(route);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
        for (i, (tab, cell)) in BottomTab::ALL.iter().zip(cells.iter()).enumerate() {
            let style = if Some(*tab) == active {
                t.chip_style(true)
            } else {
                t.muted_style()
            };
            let text = format!(" {} {} ", i + 1, tab.label());
            frame.render_widget(
                Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
                *cell,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_route() {
        assert_eq!(BottomTab::for_route(&Route::Explore), Some(BottomTab::Explore));
        assert_eq!(BottomTab::for_route(&Route::Notifications), None);
    }
}
