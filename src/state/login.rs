//! Login form.

use super::is_blank;

/// Transient message shown under the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginNotice {
    /// Sign in was accepted
    Welcome,
    /// Password recovery was requested
    RecoverySent,
    /// Google sign in is not available offline
    GoogleUnavailable,
}

impl LoginNotice {
    pub fn message(&self) -> &'static str {
        match self {
            LoginNotice::Welcome => "¡Bienvenido de nuevo!",
            LoginNotice::RecoverySent => "Te enviamos un enlace para recuperar tu contraseña",
            LoginNotice::GoogleUnavailable => "Google no está disponible en esta versión",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub notice: Option<LoginNotice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMsg {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    ForgotPassword,
    SignIn,
    ContinueWithGoogle,
    Register,
    DismissNotice,
}

impl LoginState {
    /// Both credentials are filled in
    pub fn can_sign_in(&self) -> bool {
        !is_blank(&self.email) && !is_blank(&self.password)
    }

    pub fn update(&self, msg: LoginMsg) -> Self {
        match msg {
            LoginMsg::EmailChanged(email) => Self {
                email,
                notice: None,
                ..self.clone()
            },
            LoginMsg::PasswordChanged(password) => Self {
                password,
                notice: None,
                ..self.clone()
            },
            LoginMsg::TogglePasswordVisibility => Self {
                show_password: !self.show_password,
                ..self.clone()
            },
            LoginMsg::ForgotPassword => Self {
                notice: Some(LoginNotice::RecoverySent),
                ..self.clone()
            },
            LoginMsg::SignIn if self.can_sign_in() => Self {
                notice: Some(LoginNotice::Welcome),
                ..self.clone()
            },
            LoginMsg::ContinueWithGoogle => Self {
                notice: Some(LoginNotice::GoogleUnavailable),
                ..self.clone()
            },
            LoginMsg::DismissNotice => Self {
                notice: None,
                ..self.clone()
            },
            LoginMsg::SignIn | LoginMsg::Register => self.clone(),
        }
    }
}
