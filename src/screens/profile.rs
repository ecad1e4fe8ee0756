//! Profile screen with the photo grid.

use crate::components::{avatar, Button, ButtonKind, Header, ImagePlaceholder, HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::nav::Route;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ProfileState;
use crate::styles::theme;
use crate::utils::centered_column;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::info;

const PHOTO_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileFocus {
    #[default]
    Edit,
    Share,
}

/// Read-only profile with the photo grid
#[derive(Debug, Default)]
pub struct ProfileScreen {
    state: ProfileState,
    focus: ProfileFocus,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    fn edit(&self) -> ScreenAction {
        info!(handle = %self.state.handle, "Editing profile");
        ScreenAction::push(Route::EditProfile)
    }

    fn share(&self) -> ScreenAction {
        info!(handle = %self.state.handle, "Sharing profile");
        ScreenAction::Toast(format!("Enlace de {} copiado", self.state.handle))
    }
}

impl Screen for ProfileScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        draw_profile(frame, area, &self.state, self.focus)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = match ctx.action_for(&key) {
            Some(Action::Edit) => self.edit(),
            Some(Action::MoveLeft | Action::MoveRight | Action::NextTab | Action::PrevTab) => {
                self.focus = match self.focus {
                    ProfileFocus::Edit => ProfileFocus::Share,
                    ProfileFocus::Share => ProfileFocus::Edit,
                };
                ScreenAction::None
            }
            Some(Action::Confirm) => match self.focus {
                ProfileFocus::Edit => self.edit(),
                ProfileFocus::Share => self.share(),
            },
            Some(Action::Cancel) => ScreenAction::Back,
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn hints(&self, keymap: &Keymap) -> String {
        keymap.hint(&[
            (Action::Edit, "Editar perfil"),
            (Action::NextTab, "Cambiar botón"),
            (Action::Cancel, "Atrás"),
            (Action::GoHome, "Inicio"),
            (Action::GoExplore, "Explorar"),
        ])
    }
}

pub fn draw_profile(
    frame: &mut Frame,
    area: Rect,
    state: &ProfileState,
    focus: ProfileFocus,
) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, "Perfil", None)?;

    let column = centered_column(body, 72);
    let [identity, buttons, photos] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .spacing(1)
    .areas(column);

    let initial = state.name.chars().next().unwrap_or('?');
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(avatar(initial)),
            Line::styled(state.name.as_str(), t.title_style()),
            Line::styled(state.handle.as_str(), t.muted_style()),
        ])
        .alignment(Alignment::Center),
        identity,
    );

    let [edit, share] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .areas(buttons);
    frame.render_widget(
        Button::new("Editar perfil").focused(focus == ProfileFocus::Edit),
        edit,
    );
    frame.render_widget(
        Button::new("Compartir perfil")
            .kind(ButtonKind::Secondary)
            .focused(focus == ProfileFocus::Share),
        share,
    );

    let rows = state.photos.len().div_ceil(PHOTO_COLUMNS);
    if rows == 0 {
        return Ok(());
    }
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(photos);
    for (row, chunk) in state.photos.chunks(PHOTO_COLUMNS).enumerate() {
        let cells = Layout::horizontal(vec![
            Constraint::Ratio(1, PHOTO_COLUMNS as u32);
            PHOTO_COLUMNS
        ])
        .split(row_areas[row]);
        for (col, photo) in chunk.iter().enumerate() {
            frame.render_widget(ImagePlaceholder::new(*photo), cells[col]);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{key, send};
    use crossterm::event::KeyCode;

    #[test]
    fn test_edit_key_opens_edit_profile() {
        let mut screen = ProfileScreen::new();
        assert_eq!(
            send(&mut screen, &[key(KeyCode::Char('e'))]),
            ScreenAction::push(Route::EditProfile)
        );
        assert_eq!(
            send(&mut screen, &[key(KeyCode::Enter)]),
            ScreenAction::push(Route::EditProfile)
        );
    }

    #[test]
    fn test_share_shows_toast() {
        let mut screen = ProfileScreen::new();
        let action = send(&mut screen, &[key(KeyCode::Right), key(KeyCode::Enter)]);
        assert_eq!(action, ScreenAction::Toast("Enlace de @Camilo_co copiado".to_string()));
    }

    #[test]
    fn test_esc_goes_back() {
        let mut screen = ProfileScreen::new();
        assert_eq!(send(&mut screen, &[key(KeyCode::Esc)]), ScreenAction::Back);
    }

    #[test]
    fn test_profile_is_seeded() {
        let screen = ProfileScreen::new();
        assert_eq!(screen.state().name, "Camilo Jiménez");
        assert_eq!(screen.state().photos.len(), 6);
    }
}
