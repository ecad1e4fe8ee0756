//! Account creation form.
//!
//! Submitting is only possible once every field is filled and both
//! passwords agree. A successful sign up replaces this screen with Home.

use crate::components::{Button, ButtonKind, Header, HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::nav::{NavOptions, Route, RouteKind};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::screens::{edit_field, field_input, is_printable};
use crate::state::{SignUpMsg, SignUpState};
use crate::styles::theme;
use crate::utils::{centered_column, focus, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info};

const TAGLINE: &str = "Descubre la magia de los Andes y más allá";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpFocus {
    Name,
    LastName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    Submit,
    Cancel,
}

const FOCUS_ORDER: [SignUpFocus; 8] = [
    SignUpFocus::Name,
    SignUpFocus::LastName,
    SignUpFocus::Username,
    SignUpFocus::Email,
    SignUpFocus::Password,
    SignUpFocus::ConfirmPassword,
    SignUpFocus::Submit,
    SignUpFocus::Cancel,
];

impl SignUpFocus {
    fn is_field(&self) -> bool {
        !matches!(self, SignUpFocus::Submit | SignUpFocus::Cancel)
    }

    fn value<'a>(&self, state: &'a SignUpState) -> &'a str {
        match self {
            SignUpFocus::Name => &state.name,
            SignUpFocus::LastName => &state.last_name,
            SignUpFocus::Username => &state.username,
            SignUpFocus::Email => &state.email,
            SignUpFocus::Password => &state.password,
            SignUpFocus::ConfirmPassword => &state.confirm_password,
            SignUpFocus::Submit | SignUpFocus::Cancel => "",
        }
    }

    fn message(&self, text: String) -> Option<SignUpMsg> {
        match self {
            SignUpFocus::Name => Some(SignUpMsg::NameChanged(text)),
            SignUpFocus::LastName => Some(SignUpMsg::LastNameChanged(text)),
            SignUpFocus::Username => Some(SignUpMsg::UsernameChanged(text)),
            SignUpFocus::Email => Some(SignUpMsg::EmailChanged(text)),
            SignUpFocus::Password => Some(SignUpMsg::PasswordChanged(text)),
            SignUpFocus::ConfirmPassword => Some(SignUpMsg::ConfirmPasswordChanged(text)),
            SignUpFocus::Submit | SignUpFocus::Cancel => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpView {
    pub focus: SignUpFocus,
    pub cursor: usize,
}

/// Account creation form
#[derive(Debug)]
pub struct SignUpScreen {
    state: SignUpState,
    focus: SignUpFocus,
    editor: TextInput,
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self {
            state: SignUpState::default(),
            focus: SignUpFocus::Name,
            editor: TextInput::new(),
        }
    }

    pub fn state(&self) -> &SignUpState {
        &self.state
    }

    pub fn focus(&self) -> SignUpFocus {
        self.focus
    }

    fn set_focus(&mut self, focus: SignUpFocus) {
        self.focus = focus;
        self.editor = TextInput::with_text(focus.value(&self.state));
    }

    fn edit(&mut self, key: &crossterm::event::KeyEvent, action: Option<Action>) {
        if let Some(text) = edit_field(&mut self.editor, key, action) {
            if let Some(msg) = self.focus.message(text) {
                debug!(focus = ?self.focus, "Sign-up field edited");
                self.state = self.state.update(msg);
            }
        }
    }

    fn submit(&mut self) -> ScreenAction {
        if !self.state.can_sign_up() {
            debug!("Sign-up blocked, form incomplete");
            return ScreenAction::None;
        }
        info!(email = %self.state.email, username = %self.state.username, "Account created");
        ScreenAction::NavigateWithMessage {
            route: Route::Home,
            options: NavOptions::replacing(RouteKind::SignUp),
            message: format!("¡Bienvenido, {}!", self.state.name.trim()),
        }
    }
}

impl Screen for SignUpScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let view = SignUpView {
            focus: self.focus,
            cursor: self.editor.cursor(),
        };
        draw_signup(frame, area, &self.state, &view)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action_for(&key);

        if self.is_input_focused() && is_printable(&key) {
            self.edit(&key, action);
            return Ok(ScreenAction::None);
        }

        match action {
            Some(Action::NextTab | Action::MoveDown) => {
                self.set_focus(focus::next(&FOCUS_ORDER, self.focus));
            }
            Some(Action::PrevTab | Action::MoveUp) => {
                self.set_focus(focus::prev(&FOCUS_ORDER, self.focus));
            }
            Some(Action::Save) => return Ok(self.submit()),
            Some(Action::Confirm) => match self.focus {
                SignUpFocus::Submit => return Ok(self.submit()),
                SignUpFocus::Cancel => return Ok(ScreenAction::Back),
                _ => self.set_focus(focus::next(&FOCUS_ORDER, self.focus)),
            },
            Some(Action::Cancel) => return Ok(ScreenAction::Back),
            _ if self.is_input_focused() => self.edit(&key, action),
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn hints(&self, keymap: &Keymap) -> String {
        keymap.hint(&[
            (Action::NextTab, "Siguiente"),
            (Action::Save, "Registrarse"),
            (Action::Cancel, "Cancelar"),
        ])
    }

    fn is_input_focused(&self) -> bool {
        self.focus.is_field()
    }
}

pub fn draw_signup(
    frame: &mut Frame,
    area: Rect,
    state: &SignUpState,
    view: &SignUpView,
) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, "Crear cuenta", None)?;

    let column = centered_column(body, 64);
    let [tagline, names, username, email, password, confirm, mismatch, buttons] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(column);

    frame.render_widget(
        Paragraph::new(Line::styled(TAGLINE, t.muted_style())).alignment(Alignment::Center),
        tagline,
    );

    let [name, last_name] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(names);

    let fields = [
        (SignUpFocus::Name, "Nombre", name, false),
        (SignUpFocus::LastName, "Apellido", last_name, false),
        (SignUpFocus::Username, "Nombre de usuario", username, false),
        (SignUpFocus::Email, "Correo electrónico", email, false),
        (SignUpFocus::Password, "Contraseña", password, true),
        (SignUpFocus::ConfirmPassword, "Confirmar contraseña", confirm, true),
    ];
    for (field, title, field_area, masked) in fields {
        let focused = view.focus == field;
        let input = field_input(field.value(state), focused, view.cursor);
        frame.render_text_input_widget(
            TextInputWidget::new(&input)
                .title(title)
                .placeholder("Valor")
                .masked(masked)
                .focused(focused),
            field_area,
        );
    }

    if state.passwords_mismatch() {
        frame.render_widget(
            Paragraph::new(Line::styled("Las contraseñas no coinciden", t.error_style()))
                .alignment(Alignment::Center),
            mismatch,
        );
    }

    let [submit, cancel] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .areas(buttons);
    frame.render_widget(
        Button::new("Registrarse")
            .enabled(state.can_sign_up())
            .focused(view.focus == SignUpFocus::Submit),
        submit,
    );
    frame.render_widget(
        Button::new("Cancelar")
            .kind(ButtonKind::Secondary)
            .focused(view.focus == SignUpFocus::Cancel),
        cancel,
    );
    Ok(())
}
