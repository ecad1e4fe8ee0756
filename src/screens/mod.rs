//! Screen controllers.
//!
//! Each screen pairs a controller (owns the state record, maps keys to
//! messages) with a pure `draw_*` function that paints the record.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Router                          │
//! │   Navigator ──► mount(route) ──► Box<dyn Screen>     │
//! │                                                      │
//! │   Screen::handle_event(event) ──► ScreenAction       │
//! │   Screen::render(frame)  ──► draw_*(&State, &View)   │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod detail;
pub mod edit_profile;
pub mod explore;
pub mod home;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod review;
pub mod screen_trait;
pub mod signup;
pub mod splash;

pub use detail::DetailScreen;
pub use edit_profile::EditProfileScreen;
pub use explore::ExploreScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use notifications::NotificationsScreen;
pub use profile::ProfileScreen;
pub use review::ReviewScreen;
pub use screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
pub use signup::SignUpScreen;
pub use splash::SplashScreen;

use crate::components::NoticeBanner;
use crate::keymap::Action;
use crate::nav::Route;
use crate::utils::{center_popup, TextInput};
use crossterm::event::{KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Build a fresh controller for a route. Every mount starts from the
/// screen's default state; nothing carries over from earlier visits.
pub fn mount(route: &Route) -> Box<dyn Screen> {
    match route {
        Route::Splash => Box::new(SplashScreen::new()),
        Route::Login => Box::new(LoginScreen::new()),
        Route::SignUp => Box::new(SignUpScreen::new()),
        Route::Home => Box::new(HomeScreen::new()),
        Route::Explore => Box::new(ExploreScreen::new()),
        Route::Profile => Box::new(ProfileScreen::new()),
        Route::Notifications => Box::new(NotificationsScreen::new()),
        Route::Review => Box::new(ReviewScreen::new()),
        Route::EditProfile => Box::new(EditProfileScreen::new()),
        Route::Details { place } => Box::new(DetailScreen::new(place)),
    }
}

/// Plain character without Ctrl or Alt, typed into a focused field
pub(crate) fn is_printable(key: &KeyEvent) -> bool {
    matches!(key.code, crossterm::event::KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Feed a key to the field editor and return the new text if it changed
pub(crate) fn edit_field(
    editor: &mut TextInput,
    key: &KeyEvent,
    action: Option<Action>,
) -> Option<String> {
    let before = editor.text().to_string();
    editor.handle_key_with_action(key.code, key.modifiers, action);
    (editor.text() != before).then(|| editor.text().to_string())
}

/// Input shown for a form field; only the focused field shows the editor cursor
pub(crate) fn field_input(text: &str, focused: bool, cursor: usize) -> TextInput {
    if focused {
        TextInput::with_cursor(text, cursor)
    } else {
        TextInput::with_text(text)
    }
}

/// Centered notice popup over the screen body
pub(crate) fn draw_notice(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_popup(area, 70, 30);
    let popup = Rect {
        height: popup.height.max(5).min(area.height),
        ..popup
    };
    frame.render_widget(Clear, popup);
    frame.render_widget(NoticeBanner::new(message, "Enter: OK"), popup);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::keymap::Keymap;
    use crossterm::event::{Event, KeyCode};

    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// Send each event and return the last action
    pub fn send(screen: &mut dyn Screen, events: &[Event]) -> ScreenAction {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap);
        let mut last = ScreenAction::None;
        for event in events {
            last = screen
                .handle_event(event.clone(), &ctx)
                .unwrap_or(ScreenAction::None);
        }
        last
    }

    pub fn type_text(screen: &mut dyn Screen, text: &str) {
        let events: Vec<Event> = text.chars().map(|c| key(KeyCode::Char(c))).collect();
        send(screen, &events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Keymap;
    use crossterm::event::KeyCode;

    #[test]
    fn test_mount_covers_every_route() {
        for route in [
            Route::Splash,
            Route::Login,
            Route::SignUp,
            Route::Home,
            Route::Explore,
            Route::Profile,
            Route::Notifications,
            Route::Review,
            Route::EditProfile,
            Route::details("Cartagena"),
        ] {
            let screen = mount(&route);
            assert!(!screen.hints(&Keymap::default()).is_empty(), "{}", route);
        }
    }

    #[test]
    fn test_is_printable() {
        assert!(is_printable(&KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(is_printable(&KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT)));
        assert!(!is_printable(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(!is_printable(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_edit_field_reports_changes_only() {
        let mut editor = TextInput::with_text("ab");
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(edit_field(&mut editor, &left, Some(Action::MoveLeft)), None);
        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(edit_field(&mut editor, &c, None), Some("acb".to_string()));
    }
}
