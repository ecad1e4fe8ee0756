//! Edit profile form with save and delete.

use crate::components::{Button, ButtonKind, Header, HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::screens::{draw_notice, edit_field, field_input, is_printable};
use crate::state::{EditProfileMsg, EditProfileState};
use crate::styles::theme;
use crate::utils::{centered_column, focus, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditProfileFocus {
    Username,
    FullName,
    Bio,
    Save,
    Delete,
}

const FOCUS_ORDER: [EditProfileFocus; 5] = [
    EditProfileFocus::Username,
    EditProfileFocus::FullName,
    EditProfileFocus::Bio,
    EditProfileFocus::Save,
    EditProfileFocus::Delete,
];

impl EditProfileFocus {
    fn is_field(&self) -> bool {
        matches!(
            self,
            EditProfileFocus::Username | EditProfileFocus::FullName | EditProfileFocus::Bio
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditProfileView {
    pub focus: EditProfileFocus,
    pub cursor: usize,
}

#[derive(Debug)]
pub struct EditProfileScreen {
    state: EditProfileState,
    focus: EditProfileFocus,
    editor: TextInput,
}

impl Default for EditProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl EditProfileScreen {
    pub fn new() -> Self {
        Self {
            state: EditProfileState::default(),
            focus: EditProfileFocus::Username,
            editor: TextInput::new(),
        }
    }

    pub fn state(&self) -> &EditProfileState {
        &self.state
    }

    pub fn focus(&self) -> EditProfileFocus {
        self.focus
    }

    fn set_focus(&mut self, focus: EditProfileFocus) {
        self.focus = focus;
        let text = match focus {
            EditProfileFocus::Username => self.state.username.as_str(),
            EditProfileFocus::FullName => self.state.full_name.as_str(),
            EditProfileFocus::Bio => self.state.bio.as_str(),
            _ => "",
        };
        self.editor = TextInput::with_text(text);
    }

    fn apply(&mut self, msg: EditProfileMsg) {
        debug!(msg = ?msg, "Edit profile update");
        self.state = self.state.update(msg);
    }

    fn edit(&mut self, key: &KeyEvent, action: Option<Action>) {
        let Some(text) = edit_field(&mut self.editor, key, action) else {
            return;
        };
        let msg = match self.focus {
            EditProfileFocus::Username => EditProfileMsg::UsernameChanged(text),
            EditProfileFocus::FullName => EditProfileMsg::FullNameChanged(text),
            EditProfileFocus::Bio => EditProfileMsg::BioChanged(text),
            _ => return,
        };
        self.apply(msg);
    }

    fn save(&mut self) {
        if self.state.can_save() {
            info!(username = %self.state.username, "Profile saved");
        }
        self.apply(EditProfileMsg::Save);
    }

    fn delete_account(&mut self) {
        warn!("Account deletion requested");
        self.apply(EditProfileMsg::DeleteAccount);
        self.set_focus(EditProfileFocus::Username);
    }
}

impl Screen for EditProfileScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let view = EditProfileView {
            focus: self.focus,
            cursor: self.editor.cursor(),
        };
        draw_edit_profile(frame, area, &self.state, &view)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action_for(&key);

        if self.state.notice.is_some() {
            if matches!(action, Some(Action::Confirm | Action::Cancel)) {
                self.apply(EditProfileMsg::DismissNotice);
            }
            return Ok(ScreenAction::None);
        }

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
            Some(Action::Save) => self.save(),
            Some(Action::Confirm) => match self.focus {
                EditProfileFocus::Save => self.save(),
                EditProfileFocus::Delete => self.delete_account(),
                _ => self.set_focus(focus::next(&FOCUS_ORDER, self.focus)),
            },
            Some(Action::Cancel) => return Ok(ScreenAction::Back),
            _ if self.is_input_focused() => self.edit(&key, action),
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
            (Action::Save, "Guardar"),
            (Action::Cancel, "Atrás"),
        ])
    }

    fn is_input_focused(&self) -> bool {
        self.focus.is_field()
    }
}

pub fn draw_edit_profile(
    frame: &mut Frame,
    area: Rect,
    state: &EditProfileState,
    view: &EditProfileView,
) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, "Editar perfil", None)?;

    let column = centered_column(body, 60);
    let [subtitle, username, full_name, bio, save, delete] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Actualiza cómo te ven otros viajeros",
            t.muted_style(),
        ))
        .alignment(Alignment::Center),
        subtitle,
    );

    let fields = [
        (EditProfileFocus::Username, "Nombre de usuario", &state.username, username),
        (EditProfileFocus::FullName, "Nombre completo", &state.full_name, full_name),
        (EditProfileFocus::Bio, "Biografía", &state.bio, bio),
    ];
    for (field, title, value, field_area) in fields {
        let focused = view.focus == field;
        let input = field_input(value, focused, view.cursor);
        frame.render_text_input_widget(
            TextInputWidget::new(&input)
                .title(title)
                .placeholder("Valor")
                .focused(focused),
            field_area,
        );
    }

    frame.render_widget(
        Button::new("Guardar")
            .enabled(state.can_save())
            .focused(view.focus == EditProfileFocus::Save),
        save,
    );
    frame.render_widget(
        Button::new("Eliminar cuenta")
            .kind(ButtonKind::Danger)
            .focused(view.focus == EditProfileFocus::Delete),
        delete,
    );

    if let Some(notice) = state.notice {
        draw_notice(frame, body, notice.message());
    }
    Ok(())
}
