//! Login screen controller.

use crate::components::{Button, ButtonKind, Header, HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::nav::{NavOptions, Route, RouteKind};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::screens::{draw_notice, edit_field, field_input, is_printable};
use crate::state::{LoginMsg, LoginNotice, LoginState};
use crate::styles::theme;
use crate::utils::focus;
use crate::utils::{centered_column, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    ForgotPassword,
    SignIn,
    Google,
    Register,
}

const FOCUS_ORDER: [LoginFocus; 6] = [
    LoginFocus::Email,
    LoginFocus::Password,
    LoginFocus::ForgotPassword,
    LoginFocus::SignIn,
    LoginFocus::Google,
    LoginFocus::Register,
];

impl LoginFocus {
    fn is_field(&self) -> bool {
        matches!(self, LoginFocus::Email | LoginFocus::Password)
    }
}

/// View-only flags for the login content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginView {
    pub focus: LoginFocus,
    pub cursor: usize,
}

#[derive(Debug)]
pub struct LoginScreen {
    state: LoginState,
    focus: LoginFocus,
    editor: TextInput,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            state: LoginState::default(),
            focus: LoginFocus::Email,
            editor: TextInput::new(),
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    fn set_focus(&mut self, focus: LoginFocus) {
        self.focus = focus;
        let text = match focus {
            LoginFocus::Email => self.state.email.as_str(),
            LoginFocus::Password => self.state.password.as_str(),
            _ => "",
        };
        self.editor = TextInput::with_text(text);
    }

    fn apply(&mut self, msg: LoginMsg) {
        match &msg {
            // Field contents stay out of the log
            LoginMsg::EmailChanged(_) | LoginMsg::PasswordChanged(_) => {
                debug!(focus = ?self.focus, "Login field edited");
            }
            other => debug!(msg = ?other, "Login update"),
        }
        self.state = self.state.update(msg);
    }

    fn sign_in(&mut self) -> ScreenAction {
        if !self.state.can_sign_in() {
            return ScreenAction::None;
        }
        self.apply(LoginMsg::SignIn);
        info!(email = %self.state.email, "Signed in");
        ScreenAction::NavigateWithMessage {
            route: Route::Home,
            options: NavOptions::replacing(RouteKind::Login),
            message: LoginNotice::Welcome.message().to_string(),
        }
    }

    fn activate(&mut self) -> ScreenAction {
        match self.focus {
            LoginFocus::Email => {
                self.set_focus(LoginFocus::Password);
                ScreenAction::None
            }
            LoginFocus::Password | LoginFocus::SignIn => self.sign_in(),
            LoginFocus::ForgotPassword => {
                self.apply(LoginMsg::ForgotPassword);
                ScreenAction::None
            }
            LoginFocus::Google => {
                self.apply(LoginMsg::ContinueWithGoogle);
                ScreenAction::None
            }
            LoginFocus::Register => {
                self.apply(LoginMsg::Register);
                ScreenAction::push(Route::SignUp)
            }
        }
    }
}

impl Screen for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let view = LoginView {
            focus: self.focus,
            cursor: self.editor.cursor(),
        };
        draw_login(frame, area, &self.state, &view)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action_for(&key);

        if self.state.notice.is_some() {
            if matches!(action, Some(Action::Confirm | Action::Cancel)) {
                self.apply(LoginMsg::DismissNotice);
            }
            return Ok(ScreenAction::None);
        }

        if self.is_input_focused() && is_printable(&key) {
            if let Some(text) = edit_field(&mut self.editor, &key, action) {
                self.apply(match self.focus {
                    LoginFocus::Email => LoginMsg::EmailChanged(text),
                    _ => LoginMsg::PasswordChanged(text),
                });
            }
            return Ok(ScreenAction::None);
        }

        match action {
            Some(Action::NextTab | Action::MoveDown) => {
                self.set_focus(focus::next(&FOCUS_ORDER, self.focus));
            }
            Some(Action::PrevTab | Action::MoveUp) => {
                self.set_focus(focus::prev(&FOCUS_ORDER, self.focus));
            }
            Some(Action::ToggleVisibility) => self.apply(LoginMsg::TogglePasswordVisibility),
            Some(Action::Confirm) => return Ok(self.activate()),
            Some(Action::Cancel) => return Ok(ScreenAction::Back),
            _ if self.is_input_focused() => {
                if let Some(text) = edit_field(&mut self.editor, &key, action) {
                    self.apply(match self.focus {
                        LoginFocus::Email => LoginMsg::EmailChanged(text),
                        _ => LoginMsg::PasswordChanged(text),
                    });
                }
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn hints(&self, keymap: &Keymap) -> String {
        if self.state.notice.is_some() {
            return keymap.hint(&[(Action::Confirm, "OK")]);
        }
        keymap.hint(&[
            (Action::NextTab, "Siguiente"),
            (Action::Confirm, "Aceptar"),
            (Action::ToggleVisibility, "Ver contraseña"),
            (Action::Cancel, "Atrás"),
        ])
    }

    fn is_input_focused(&self) -> bool {
        self.focus.is_field()
    }
}

/// Paint the login form
pub fn draw_login(frame: &mut Frame, area: Rect, state: &LoginState, view: &LoginView) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, "Iniciar sesión", None)?;

    let column = centered_column(body, 56);
    let [subtitle, email, password, forgot, sign_in, or, google, register] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Ingresa a tu cuenta para seguir explorando",
            t.muted_style(),
        ))
        .alignment(Alignment::Center),
        subtitle,
    );

    let email_input = field_input(&state.email, view.focus == LoginFocus::Email, view.cursor);
    frame.render_text_input_widget(
        TextInputWidget::new(&email_input)
            .title("Correo electrónico")
            .placeholder("tu@correo.com")
            .focused(view.focus == LoginFocus::Email),
        email,
    );

    let password_input =
        field_input(&state.password, view.focus == LoginFocus::Password, view.cursor);
    let password_title = if state.show_password {
        "Contraseña (visible)"
    } else {
        "Contraseña"
    };
    frame.render_text_input_widget(
        TextInputWidget::new(&password_input)
            .title(password_title)
            .placeholder("Valor")
            .masked(!state.show_password)
            .focused(view.focus == LoginFocus::Password),
        password,
    );

    frame.render_widget(
        Button::new("¿Olvidaste tu contraseña?")
            .kind(ButtonKind::Link)
            .focused(view.focus == LoginFocus::ForgotPassword),
        forgot,
    );
    frame.render_widget(
        Button::new("Iniciar sesión")
            .enabled(state.can_sign_in())
            .focused(view.focus == LoginFocus::SignIn),
        sign_in,
    );
    frame.render_widget(
        Paragraph::new(Line::styled("o", t.muted_style())).alignment(Alignment::Center),
        or,
    );
    frame.render_widget(
        Button::new("Continuar con Google")
            .kind(ButtonKind::Secondary)
            .focused(view.focus == LoginFocus::Google),
        google,
    );
    frame.render_widget(
        Button::new("Registrarse")
            .kind(ButtonKind::Secondary)
            .focused(view.focus == LoginFocus::Register),
        register,
    );

    if let Some(notice) = state.notice {
        draw_notice(frame, body, notice.message());
    }
    Ok(())
}
