//! Splash screen.

use crate::components::Button;
use crate::keymap::{Action, Keymap};
use crate::nav::Route;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::SplashState;
use crate::styles::theme;
use crate::widgets::CondorLogo;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::info;

/// Landing screen with the logo, slogan and start button
#[derive(Debug, Default)]
pub struct SplashScreen {
    state: SplashState,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for SplashScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        draw_splash(frame, area, &self.state);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.action_for(&key) {
            Some(Action::Confirm) => {
                info!("Starting from splash");
                Ok(ScreenAction::push(Route::Login))
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn hints(&self, keymap: &Keymap) -> String {
        keymap.hint(&[
            (Action::Confirm, "Comenzar"),
            (Action::Help, "Ayuda"),
            (Action::Quit, "Salir"),
        ])
    }
}

pub fn draw_splash(frame: &mut Frame, area: Rect, state: &SplashState) {
    let t = theme();
    let logo = CondorLogo::regular();

    let [logo_area, slogan_area, button_area] = Layout::vertical([
        Constraint::Length(logo.height()),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .flex(Flex::Center)
    .spacing(1)
    .areas(area);

    let [logo_area] = Layout::horizontal([Constraint::Length(logo.width())])
        .flex(Flex::Center)
        .areas(logo_area);
    frame.render_widget(logo, logo_area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(state.slogan.as_str(), t.emphasis_style()),
            Line::from(""),
            Line::styled("· Colombia ·", t.muted_style()),
        ])
        .alignment(Alignment::Center),
        slogan_area,
    );

    let [button_area] = Layout::horizontal([Constraint::Length(20)])
        .flex(Flex::Center)
        .areas(button_area);
    frame.render_widget(Button::new("Comenzar").focused(true), button_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{key, send};
    use crossterm::event::KeyCode;

    #[test]
    fn test_enter_goes_to_login() {
        let mut screen = SplashScreen::new();
        assert_eq!(
            send(&mut screen, &[key(KeyCode::Enter)]),
            ScreenAction::push(Route::Login)
        );
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut screen = SplashScreen::new();
        assert_eq!(send(&mut screen, &[key(KeyCode::Down)]), ScreenAction::None);
    }
}
