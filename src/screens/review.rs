//! Review composer: star rating, comment and publish.
//!
//! While the rating row is focused the digits `1`-`5` pick a rating
//! directly; in the comment field they are typed like any other character.

use crate::components::{large_stars, Button, Header, HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::screens::{edit_field, field_input, is_printable};
use crate::state::{ReviewMsg, ReviewState};
use crate::styles::theme;
use crate::utils::{centered_column, focus, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

const PUBLISHED: &str = "Reseña publicada";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFocus {
    Rating,
    Comment,
    Publish,
}

const FOCUS_ORDER: [ReviewFocus; 3] = [ReviewFocus::Rating, ReviewFocus::Comment, ReviewFocus::Publish];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewView {
    pub focus: ReviewFocus,
    pub cursor: usize,
}

/// Review composer: star rating plus a comment
#[derive(Debug)]
pub struct ReviewScreen {
    state: ReviewState,
    focus: ReviewFocus,
    editor: TextInput,
}

impl Default for ReviewScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewScreen {
    pub fn new() -> Self {
        Self {
            state: ReviewState::default(),
            focus: ReviewFocus::Rating,
            editor: TextInput::new(),
        }
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn focus(&self) -> ReviewFocus {
        self.focus
    }

    fn set_focus(&mut self, focus: ReviewFocus) {
        self.focus = focus;
        if focus == ReviewFocus::Comment {
            self.editor = TextInput::with_text(&self.state.comment);
        }
    }

    fn apply(&mut self, msg: ReviewMsg) {
        debug!(msg = ?msg, "Review update");
        self.state = self.state.update(msg);
    }

    fn publish(&mut self) -> ScreenAction {
        if !self.state.can_publish() {
            return ScreenAction::None;
        }
        info!(rating = self.state.rating, "Review published");
        ScreenAction::BackWithMessage(PUBLISHED.to_string())
    }
}

impl Screen for ReviewScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let view = ReviewView {
            focus: self.focus,
            cursor: self.editor.cursor(),
        };
        draw_review(frame, area, &self.state, &view)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.action_for(&key);

        if self.focus == ReviewFocus::Comment && is_printable(&key) {
            if let Some(text) = edit_field(&mut self.editor, &key, action) {
                self.apply(ReviewMsg::CommentChanged(text));
            }
            return Ok(ScreenAction::None);
        }

        if self.focus == ReviewFocus::Rating {
            if let KeyCode::Char(digit @ '1'..='5') = key.code {
                let rating = digit as u8 - b'0';
                self.apply(ReviewMsg::SetRating(rating));
                return Ok(ScreenAction::None);
            }
        }

        match action {
            Some(Action::NextTab | Action::MoveDown) => {
                self.set_focus(focus::next(&FOCUS_ORDER, self.focus));
            }
            Some(Action::PrevTab | Action::MoveUp) => {
                self.set_focus(focus::prev(&FOCUS_ORDER, self.focus));
            }
            Some(Action::MoveRight) if self.focus == ReviewFocus::Rating => {
                self.apply(ReviewMsg::SetRating(self.state.rating.saturating_add(1)));
            }
            Some(Action::MoveLeft) if self.focus == ReviewFocus::Rating => {
                self.apply(ReviewMsg::SetRating(self.state.rating.saturating_sub(1)));
            }
            Some(Action::Save) => return Ok(self.publish()),
            Some(Action::Confirm) => match self.focus {
                ReviewFocus::Publish => return Ok(self.publish()),
                _ => self.set_focus(focus::next(&FOCUS_ORDER, self.focus)),
            },
            Some(Action::Cancel) => return Ok(ScreenAction::Back),
            _ if self.focus == ReviewFocus::Comment => {
                if let Some(text) = edit_field(&mut self.editor, &key, action) {
                    self.apply(ReviewMsg::CommentChanged(text));
                }
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn hints(&self, keymap: &Keymap) -> String {
        let mut entries = vec![(Action::NextTab, "Siguiente")];
        if self.focus == ReviewFocus::Rating {
            entries.push((Action::MoveRight, "Estrellas"));
        }
        entries.push((Action::Save, "Publicar"));
        entries.push((Action::Cancel, "Atrás"));
        keymap.hint(&entries)
    }

    fn is_input_focused(&self) -> bool {
        self.focus == ReviewFocus::Comment
    }
}

pub fn draw_review(frame: &mut Frame, area: Rect, state: &ReviewState, view: &ReviewView) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, "Escribir reseña", None)?;

    let column = centered_column(body, 64);
    let [intro, label, stars, comment, publish] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(6),
        Constraint::Length(3),
    ])
    .spacing(1)
    .areas(column);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("¿Que tal estuvo tu aventura?", t.title_style()),
            Line::styled(
                "Tu opinión ayuda a otros viajeros a descubrir la magia de Colombia.",
                t.muted_style(),
            ),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        intro,
    );

    let label_style = if view.focus == ReviewFocus::Rating {
        t.emphasis_style()
    } else {
        t.muted_style()
    };
    frame.render_widget(
        Paragraph::new(Line::styled("TU CALIFICACION", label_style)).alignment(Alignment::Center),
        label,
    );
    frame.render_widget(
        Paragraph::new(large_stars(state.rating)).alignment(Alignment::Center),
        stars,
    );

    let focused = view.focus == ReviewFocus::Comment;
    let input = field_input(&state.comment, focused, view.cursor);
    frame.render_text_input_widget(
        TextInputWidget::new(&input)
            .title("Comentario")
            .placeholder("Cuéntanos sobre tu experiencia...")
            .focused(focused),
        comment,
    );

    frame.render_widget(
        Button::new("Publicar Reseña")
            .enabled(state.can_publish())
            .focused(view.focus == ReviewFocus::Publish),
        publish,
    );
    Ok(())
}
