//! Home feed.

use crate::components::{Header, PostCard, HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::nav::Route;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{HomeMsg, HomeState};
use crate::styles::theme;
use crate::utils::{centered_column, focus};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info};

/// Rows per post card, borders included
const POST_CARD_HEIGHT: u16 = 11;

/// Home feed of traveller posts
#[derive(Debug, Default)]
pub struct HomeScreen {
    state: HomeState,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    fn step(&mut self, delta: isize) {
        let len = self.state.posts.len();
        let index = match self.state.selected {
            Some(current) => focus::clamp_step(current, delta, len),
            None => 0,
        };
        debug!(index, "Select post");
        self.state = self.state.update(HomeMsg::SelectPost(index));
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let bell = format!("🔔 {}", ctx.keymap.get_key_display_for_action(Action::OpenNotifications));
        draw_home(frame, area, &self.state, &bell)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.action_for(&key) {
            Some(Action::MoveDown | Action::NextTab) => self.step(1),
            Some(Action::MoveUp | Action::PrevTab) => self.step(-1),
            Some(Action::Confirm) => {
                if let Some(post) = self.state.selected_post() {
                    info!(location = %post.location, "Opening post details");
                    return Ok(ScreenAction::push(Route::details(post.location.clone())));
                }
            }
            Some(Action::OpenNotifications) => {
                return Ok(ScreenAction::push(Route::Notifications));
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn hints(&self, keymap: &Keymap) -> String {
        keymap.hint(&[
            (Action::MoveDown, "Siguiente"),
            (Action::Confirm, "Ver lugar"),
            (Action::OpenNotifications, "Notificaciones"),
            (Action::GoExplore, "Explorar"),
            (Action::GoProfile, "Perfil"),
        ])
    }
}

/// First card to draw so that the selected one stays on screen
fn first_visible(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(index) if visible > 0 && index >= visible => index + 1 - visible,
        _ => 0,
    }
}

pub fn draw_home(frame: &mut Frame, area: Rect, state: &HomeState, bell: &str) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, "Inicio", Some(bell))?;

    let column = centered_column(body, 72);
    if state.posts.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("Aún no hay publicaciones", t.muted_style()))
                .alignment(Alignment::Center),
            column,
        );
        return Ok(());
    }

    let visible = (column.height / POST_CARD_HEIGHT).max(1) as usize;
    let start = first_visible(state.selected, visible);
    let mut y = column.y;
    for (index, post) in state.posts.iter().enumerate().skip(start) {
        let bottom = column.y + column.height;
        if y >= bottom {
            break;
        }
        let card = Rect {
            y,
            height: POST_CARD_HEIGHT.min(bottom - y),
            ..column
        };
        frame.render_widget(PostCard::new(post, state.selected == Some(index)), card);
        y += POST_CARD_HEIGHT;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{key, send};
    use crossterm::event::KeyCode;

    #[test]
    fn test_first_down_selects_first_post() {
        let mut screen = HomeScreen::new();
        send(&mut screen, &[key(KeyCode::Down)]);
        assert_eq!(screen.state().selected, Some(0));
        send(&mut screen, &[key(KeyCode::Down), key(KeyCode::Down)]);
        assert_eq!(screen.state().selected, Some(2));
    }

    #[test]
    fn test_selection_stops_at_ends() {
        let mut screen = HomeScreen::new();
        send(&mut screen, &[key(KeyCode::Down), key(KeyCode::Up), key(KeyCode::Up)]);
        assert_eq!(screen.state().selected, Some(0));
        let presses: Vec<_> = (0..10).map(|_| key(KeyCode::Down)).collect();
        send(&mut screen, &presses);
        assert_eq!(screen.state().selected, Some(screen.state().posts.len() - 1));
    }

    #[test]
    fn test_enter_opens_selected_post_location() {
        let mut screen = HomeScreen::new();
        assert_eq!(send(&mut screen, &[key(KeyCode::Enter)]), ScreenAction::None);

        let action = send(&mut screen, &[key(KeyCode::Down), key(KeyCode::Enter)]);
        let location = screen.state().posts[0].location.clone();
        assert_eq!(action, ScreenAction::push(Route::details(location)));
    }

    #[test]
    fn test_n_opens_notifications() {
        let mut screen = HomeScreen::new();
        assert_eq!(
            send(&mut screen, &[key(KeyCode::Char('n'))]),
            ScreenAction::push(Route::Notifications)
        );
    }

    #[test]
    fn test_first_visible_keeps_selection_on_screen() {
        assert_eq!(first_visible(None, 2), 0);
        assert_eq!(first_visible(Some(1), 2), 0);
        assert_eq!(first_visible(Some(3), 2), 2);
    }
}
