//! Profile editing form.

use super::is_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditProfileNotice {
    Saved,
    AccountDeleted,
}

impl EditProfileNotice {
    pub fn message(&self) -> &'static str {
        match self {
            EditProfileNotice::Saved => "Cambios guardados",
            EditProfileNotice::AccountDeleted => "Cuenta eliminada",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditProfileState {
    pub username: String,
    pub full_name: String,
    pub bio: String,
    pub notice: Option<EditProfileNotice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditProfileMsg {
    UsernameChanged(String),
    FullNameChanged(String),
    BioChanged(String),
    Save,
    DeleteAccount,
    DismissNotice,
}

impl EditProfileState {
    /// Username and full name are required; the bio is optional
    pub fn can_save(&self) -> bool {
        !is_blank(&self.username) && !is_blank(&self.full_name)
    }

    pub fn update(&self, msg: EditProfileMsg) -> Self {
        match msg {
            EditProfileMsg::UsernameChanged(username) => Self {
                username,
                ..self.clone()
            },
            EditProfileMsg::FullNameChanged(full_name) => Self {
                full_name,
                ..self.clone()
            },
            EditProfileMsg::BioChanged(bio) => Self {
                bio,
                ..self.clone()
            },
            EditProfileMsg::Save if self.can_save() => Self {
                notice: Some(EditProfileNotice::Saved),
                ..self.clone()
            },
            EditProfileMsg::Save => self.clone(),
            EditProfileMsg::DeleteAccount => Self {
                notice: Some(EditProfileNotice::AccountDeleted),
                ..Self::default()
            },
            EditProfileMsg::DismissNotice => Self {
                notice: None,
                ..self.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EditProfileState {
        EditProfileState::default()
            .update(EditProfileMsg::UsernameChanged("camilo_co".into()))
            .update(EditProfileMsg::FullNameChanged("Camilo Jiménez".into()))
            .update(EditProfileMsg::BioChanged("Viajero".into()))
    }

    #[test]
    fn test_save_requires_username_and_full_name() {
        let state = EditProfileState::default().update(EditProfileMsg::BioChanged("hola".into()));
        assert!(!state.can_save());
        assert_eq!(state.update(EditProfileMsg::Save).notice, None);

        let saved = filled().update(EditProfileMsg::Save);
        assert_eq!(saved.notice, Some(EditProfileNotice::Saved));
        assert_eq!(saved.username, "camilo_co");
    }

    #[test]
    fn test_delete_account_resets_fields() {
        let state = filled().update(EditProfileMsg::DeleteAccount);
        assert_eq!(
            state,
            EditProfileState {
                notice: Some(EditProfileNotice::AccountDeleted),
                ..EditProfileState::default()
            }
        );
    }

    #[test]
    fn test_dismiss_keeps_fields() {
        let state = filled()
            .update(EditProfileMsg::Save)
            .update(EditProfileMsg::DismissNotice);
        assert_eq!(state, filled());
    }
}
