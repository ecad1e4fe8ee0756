//! Notifications list with filter tabs.

use crate::components::{chip_row, notification_line, Header, HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{NotificationTab, NotificationsMsg, NotificationsState};
use crate::styles::theme;
use crate::utils::centered_column;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct NotificationsScreen {
    state: NotificationsState,
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NotificationsState {
        &self.state
    }

    fn apply(&mut self, msg: NotificationsMsg) {
        debug!(msg = ?msg, "Notifications update");
        self.state = self.state.update(msg);
    }
}

impl Screen for NotificationsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        draw_notifications(frame, area, &self.state)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let tab = self.state.selected_tab;
        match ctx.action_for(&key) {
            Some(Action::NextTab | Action::MoveRight) => {
                self.apply(NotificationsMsg::SelectTab(tab.next()));
            }
            Some(Action::PrevTab | Action::MoveLeft) => {
                self.apply(NotificationsMsg::SelectTab(tab.prev()));
            }
            Some(Action::ClearAll) => {
                info!(count = self.state.notifications.len(), "Clearing notifications");
                self.apply(NotificationsMsg::ClearAll);
            }
            Some(Action::Cancel) => return Ok(ScreenAction::Back),
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn hints(&self, keymap: &Keymap) -> String {
        keymap.hint(&[
            (Action::NextTab, "Pestaña"),
            (Action::ClearAll, "Limpiar todo"),
            (Action::Cancel, "Atrás"),
        ])
    }
}

pub fn draw_notifications(frame: &mut Frame, area: Rect, state: &NotificationsState) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, "Notificaciones", None)?;

    let column = centered_column(body, 72);
    let [tabs, clear, list] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(chip_row(
            NotificationTab::ALL.iter().map(|tab| tab.label()),
            state.selected_tab.index(),
        )),
        tabs,
    );
    frame.render_widget(
        Paragraph::new(Line::styled("Limpiar todo", t.emphasis_style())).alignment(Alignment::Right),
        clear,
    );

    if state.notifications.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("No tienes notificaciones", t.muted_style()))
                .alignment(Alignment::Center),
            list,
        );
        return Ok(());
    }

    let items: Vec<ListItem> = state
        .notifications
        .iter()
        .map(|n| ListItem::new(vec![notification_line(n), Line::from("")]))
        .collect();
    frame.render_widget(List::new(items), list);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{key, send};
    use crossterm::event::KeyCode;

    #[test]
    fn test_tabs_wrap() {
        let mut screen = NotificationsScreen::new();
        send(&mut screen, &[key(KeyCode::BackTab)]);
        assert_eq!(screen.state().selected_tab, NotificationTab::Likes);
        send(&mut screen, &[key(KeyCode::Right)]);
        assert_eq!(screen.state().selected_tab, NotificationTab::All);
    }

    #[test]
    fn test_clear_all_empties_list() {
        let mut screen = NotificationsScreen::new();
        assert_eq!(screen.state().notifications.len(), 4);
        send(&mut screen, &[key(KeyCode::Char('x')), key(KeyCode::Char('x'))]);
        assert!(screen.state().notifications.is_empty());
    }

    #[test]
    fn test_escape_goes_back() {
        let mut screen = NotificationsScreen::new();
        assert_eq!(send(&mut screen, &[key(KeyCode::Esc)]), ScreenAction::Back);
    }
}
