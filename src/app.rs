//! Host event loop.
//!
//! [`Router`] owns the back-stack and the mounted screen and is independent of
//! the real terminal, so it can be driven with a `TestBackend`. [`App`] wraps
//! it with terminal setup and the poll loop.

use crate::components::{BottomBar, BottomTab, Footer, HelpOverlay};
use crate::config::Config;
use crate::keymap::{Action, Keymap};
use crate::nav::{NavOptions, Navigator, Route};
use crate::screens::{self, key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{init_theme, theme};
use crate::tui::Tui;
use crate::utils::create_standard_layout;
use crate::widgets::{Toast, ToastManager};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::widgets::Block;
use ratatui::Frame;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Back-stack, mounted screen and the chrome drawn around it
pub struct Router {
    navigator: Navigator,
    screen: Box<dyn Screen>,
    keymap: Keymap,
    toasts: ToastManager,
    help_visible: bool,
    config_path: String,
}

impl Router {
    pub fn new(start: Route, keymap: Keymap) -> Self {
        info!(route = %start, "Starting");
        Self {
            screen: screens::mount(&start),
            navigator: Navigator::new(start),
            keymap,
            toasts: ToastManager::new(),
            help_visible: false,
            config_path: crate::utils::get_config_path().display().to_string(),
        }
    }

    /// Path shown in the help overlay
    pub fn with_config_path(mut self, path: &Path) -> Self {
        self.config_path = path.display().to_string();
        self
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    /// Handle one terminal event. Returns false when the app should quit.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let Some(key) = key_press(&event) else {
            return Ok(true);
        };

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Quit with ctrl+c");
            return Ok(false);
        }

        let action = self.keymap.get_action(key.code, key.modifiers);

        if self.help_visible {
            if matches!(action, Some(Action::Help | Action::Cancel | Action::Confirm)) {
                self.help_visible = false;
            }
            return Ok(true);
        }

        // Single-letter globals are typed into focused fields instead
        if !self.screen.is_input_focused() {
            match action {
                Some(Action::Quit) => {
                    info!(route = %self.current_route(), "Quit");
                    return Ok(false);
                }
                Some(Action::Help) => {
                    self.help_visible = true;
                    return Ok(true);
                }
                Some(Action::ToggleTheme) => {
                    let next = theme().theme_type.toggled();
                    info!(theme = ?next, "Theme toggled");
                    init_theme(next);
                    return Ok(true);
                }
                Some(tab @ (Action::GoHome | Action::GoExplore | Action::GoProfile))
                    if self.current_route().shows_bottom_bar() =>
                {
                    let tab = match tab {
                        Action::GoHome => BottomTab::Home,
                        Action::GoExplore => BottomTab::Explore,
                        _ => BottomTab::Profile,
                    };
                    self.navigate(tab.route(), NavOptions::bottom_bar());
                    return Ok(true);
                }
                _ => {}
            }
        }

        let ctx = ScreenContext::new(&self.keymap);
        let screen_action = self.screen.handle_event(event, &ctx)?;
        Ok(self.apply(screen_action))
    }

    /// Carry out a screen's request. Returns false on quit.
    pub fn apply(&mut self, action: ScreenAction) -> bool {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(route, options) => self.navigate(route, options),
            ScreenAction::NavigateWithMessage {
                route,
                options,
                message,
            } => {
                self.navigate(route, options);
                self.toasts.push(Toast::success(message));
            }
            ScreenAction::Back => self.back(),
            ScreenAction::BackWithMessage(message) => {
                self.back();
                self.toasts.push(Toast::success(message));
            }
            ScreenAction::Toast(message) => self.toasts.info(message),
            ScreenAction::Quit => return false,
        }
        true
    }

    fn navigate(&mut self, route: Route, options: NavOptions) {
        let from = self.current_route().clone();
        let pushed = self.navigator.navigate(route, options);
        if pushed || *self.current_route() != from {
            info!(from = %from, to = %self.current_route(), depth = self.navigator.depth(), "Navigate");
            self.remount();
        } else {
            debug!(route = %from, "Already on route");
        }
    }

    fn back(&mut self) {
        let from = self.current_route().clone();
        if self.navigator.pop() {
            info!(from = %from, to = %self.current_route(), "Back");
            self.remount();
        } else {
            debug!(route = %from, "Back at root ignored");
        }
    }

    fn remount(&mut self) {
        self.screen = screens::mount(self.navigator.current());
    }

    /// Expire toasts. Called once per loop iteration.
    pub fn tick(&mut self) {
        self.toasts.tick();
    }

    /// Footer text for the current state
    pub fn hints(&self) -> String {
        if self.help_visible {
            return self.keymap.hint(&[(Action::Help, "Cerrar ayuda")]);
        }
        let mut hints = self.screen.hints(&self.keymap);
        hints.push_str(" | ");
        hints.push_str(&self.keymap.hint(&[(Action::Help, "Ayuda")]));
        hints
    }

    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme().background_style()), area);

        let route = self.navigator.current().clone();
        let layout = create_standard_layout(area, route.shows_bottom_bar());

        let ctx = RenderContext::new(&self.keymap);
        self.screen.render(frame, layout.body, &ctx)?;
        BottomBar::render(frame, layout.bottom_bar, &route)?;
        Footer::render(frame, layout.footer, &self.hints())?;
        self.toasts.render(frame, layout.body);

        if self.help_visible {
            HelpOverlay::render(frame, area, &self.keymap, &self.config_path)?;
        }
        Ok(())
    }
}

/// Main application: the router plus the real terminal
pub struct App {
    router: Router,
    tui: Tui,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &Config, start: Route, config_path: &Path) -> Result<Self> {
        Ok(Self {
            router: Router::new(start, config.keymap.clone()).with_config_path(config_path),
            tui: Tui::new()?,
            tick_rate: config.tick_rate(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.router.tick();

            let router = &mut self.router;
            let mut drawn = Ok(());
            self.tui.terminal_mut().draw(|frame| drawn = router.draw(frame))?;
            drawn?;

            if let Some(event) = self.tui.poll_event(self.tick_rate)? {
                if !self.router.dispatch(event)? {
                    break;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn start_at(start: Route) -> Router {
        Router::new(start, Keymap::default())
    }

    #[test]
    fn test_splash_enter_opens_login() {
        let mut router = start_at(Route::Splash);
        assert!(router.dispatch(key(KeyCode::Enter)).unwrap());
        assert_eq!(router.current_route(), &Route::Login);
        assert_eq!(router.navigator().depth(), 2);
    }

    #[test]
    fn test_q_quits_unless_typing() {
        let mut router = start_at(Route::Login);
        assert!(router.dispatch(key(KeyCode::Char('q'))).unwrap());

        let mut router = start_at(Route::Home);
        assert!(!router.dispatch(key(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut router = start_at(Route::Login);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!router.dispatch(ctrl_c).unwrap());
    }

    #[test]
    fn test_bottom_bar_only_where_shown() {
        let mut router = start_at(Route::Home);
        router.dispatch(key(KeyCode::Char('2'))).unwrap();
        assert_eq!(router.current_route(), &Route::Explore);
        router.dispatch(key(KeyCode::Char('1'))).unwrap();
        assert_eq!(router.current_route(), &Route::Home);
        assert_eq!(router.navigator().depth(), 1);

        let mut router = start_at(Route::Review);
        router.dispatch(key(KeyCode::Char('1'))).unwrap();
        assert_eq!(router.current_route(), &Route::Review);
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut router = start_at(Route::Home);
        router.dispatch(key(KeyCode::Char('?'))).unwrap();
        assert!(router.help_visible());
        router.dispatch(key(KeyCode::Char('2'))).unwrap();
        assert_eq!(router.current_route(), &Route::Home);
        router.dispatch(key(KeyCode::Esc)).unwrap();
        assert!(!router.help_visible());
    }

    #[test]
    fn test_message_actions_show_toast() {
        let mut router = start_at(Route::Home);
        router.apply(ScreenAction::push(Route::Review));
        router.apply(ScreenAction::BackWithMessage("Reseña publicada".into()));
        assert_eq!(router.current_route(), &Route::Home);
        assert_eq!(router.toast().map(|t| t.message.as_str()), Some("Reseña publicada"));
    }

    #[test]
    fn test_esc_on_profile_returns_home() {
        let mut router = start_at(Route::Home);
        router.dispatch(key(KeyCode::Char('3'))).unwrap();
        assert_eq!(router.current_route(), &Route::Profile);
        assert_eq!(router.navigator().depth(), 2);

        router.dispatch(key(KeyCode::Esc)).unwrap();
        assert_eq!(router.current_route(), &Route::Home);
        assert_eq!(router.navigator().depth(), 1);
    }

    #[test]
    fn test_back_at_root_is_ignored() {
        let mut router = start_at(Route::Home);
        assert!(router.apply(ScreenAction::Back));
        assert_eq!(router.current_route(), &Route::Home);
    }

    #[test]
    fn test_draw_home_shows_bottom_bar() {
        let mut router = start_at(Route::Home);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| router.draw(frame).unwrap()).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Explorar"));
        assert!(text.contains("Alejandra Gomez"));
    }
}
