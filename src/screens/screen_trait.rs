//! Screen trait and associated types.
//!
//! A screen controller owns its state record and turns input events into
//! state updates plus a `ScreenAction` for the router:
//!
//! 1. Screens own their state; nothing else reads or writes it
//! 2. Event handling returns an action instead of touching the back-stack
//! 3. Context objects give read-only access to shared resources

use crate::keymap::{Action, Keymap};
use crate::nav::{NavOptions, Route};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Active keymap, used for key hints.
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Active keymap, used to resolve key events to actions.
    pub keymap: &'a Keymap,
}

impl<'a> ScreenContext<'a> {
    pub fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }

    /// Resolve a key press to its semantic action
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.keymap.get_action(key.code, key.modifiers)
    }
}

/// Actions that a screen can return after handling an event.
///
/// Screens signal navigation through these instead of mutating the
/// navigator directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Navigate to a route.
    Navigate(Route, NavOptions),
    /// Navigate and show a toast on arrival.
    NavigateWithMessage {
        route: Route,
        options: NavOptions,
        message: String,
    },
    /// Pop back to the previous route.
    Back,
    /// Pop back and show a toast.
    BackWithMessage(String),
    /// Show a toast on the current screen.
    Toast(String),
    /// Request to quit the application.
    Quit,
}

impl ScreenAction {
    /// Plain push navigation
    pub fn push(route: Route) -> Self {
        Self::Navigate(route, NavOptions::push())
    }
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     state: MyState,
/// }
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         draw_my_screen(frame, area, &self.state);
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
///
///     fn hints(&self, keymap: &Keymap) -> String {
///         keymap.hint(&[(Action::Cancel, "Atrás")])
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen body. The router draws the bottom bar and footer.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Footer key hints, "Label: Key | Label: Key".
    fn hints(&self, keymap: &Keymap) -> String;

    /// Check if a text input is currently focused.
    ///
    /// When true, single-letter global keys are typed instead of handled.
    fn is_input_focused(&self) -> bool {
        false
    }
}

/// Extract a key press, ignoring releases and repeats from enhanced terminals
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_key_press_ignores_release() {
        let press = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(key_press(&press).is_some());

        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(key_press(&release).is_none());
        assert!(key_press(&Event::FocusGained).is_none());
    }

    #[test]
    fn test_context_resolves_actions() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap);
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(ctx.action_for(&key), Some(Action::Cancel));
    }
}
