//! Account creation form.

use super::is_blank;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpState {
    pub name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpMsg {
    NameChanged(String),
    LastNameChanged(String),
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    Reset,
}

impl SignUpState {
    /// Every field is filled in and the two passwords agree
    pub fn can_sign_up(&self) -> bool {
        [
            &self.name,
            &self.last_name,
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .all(|field| !is_blank(field))
            && self.password == self.confirm_password
    }

    /// Passwords were both typed but differ
    pub fn passwords_mismatch(&self) -> bool {
        !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && self.password != self.confirm_password
    }

    pub fn update(&self, msg: SignUpMsg) -> Self {
        match msg {
            SignUpMsg::NameChanged(name) => Self {
                name,
                ..self.clone()
            },
            SignUpMsg::LastNameChanged(last_name) => Self {
                last_name,
                ..self.clone()
            },
            SignUpMsg::UsernameChanged(username) => Self {
                username,
                ..self.clone()
            },
            SignUpMsg::EmailChanged(email) => Self {
                email,
                ..self.clone()
            },
            SignUpMsg::PasswordChanged(password) => Self {
                password,
                ..self.clone()
            },
            SignUpMsg::ConfirmPasswordChanged(confirm_password) => Self {
                confirm_password,
                ..self.clone()
            },
            SignUpMsg::Reset => Self::default(),
        }
    }
}
