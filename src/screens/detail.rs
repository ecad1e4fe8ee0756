//! Place details with community reviews.

use crate::components::{chip_row, Header, ImagePlaceholder, ReviewCard, HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::nav::Route;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{DetailMsg, DetailState};
use crate::styles::theme;
use crate::utils::{centered_column, focus};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug)]
pub struct DetailScreen {
    state: DetailState,
    selected: usize,
}

impl DetailScreen {
    /// Mount the detail screen for the place named in the route
    pub fn new(place: &str) -> Self {
        Self {
            state: DetailState::for_place(place),
            selected: 0,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn like_selected(&mut self) {
        let Some(review) = self.state.reviews.get(self.selected) else {
            return;
        };
        let msg = DetailMsg::LikeReview(review.id);
        debug!(msg = ?msg, "Detail update");
        self.state = self.state.update(msg);
    }
}

impl Screen for DetailScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        draw_detail(frame, area, &self.state, self.selected)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let len = self.state.reviews.len();
        match ctx.action_for(&key) {
            Some(Action::MoveDown) => self.selected = focus::clamp_step(self.selected, 1, len),
            Some(Action::MoveUp) => self.selected = focus::clamp_step(self.selected, -1, len),
            Some(Action::Like) => self.like_selected(),
            Some(Action::AddReview) => {
                info!(place = %self.state.title, "Writing a review");
                return Ok(ScreenAction::push(Route::Review));
            }
            Some(Action::Cancel) => return Ok(ScreenAction::Back),
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn hints(&self, keymap: &Keymap) -> String {
        keymap.hint(&[
            (Action::MoveDown, "Reseña"),
            (Action::Like, "Me gusta"),
            (Action::AddReview, "Escribir reseña"),
            (Action::Cancel, "Atrás"),
        ])
    }
}

pub fn draw_detail(frame: &mut Frame, area: Rect, state: &DetailState, selected: usize) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, &state.title, None)?;

    let column = centered_column(body, 76);
    let [image, about, chips, heading, reviews] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(column);

    frame.render_widget(ImagePlaceholder::new(state.image), image);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(state.title.as_str(), t.title_style()),
            Line::from(vec![
                Span::styled("📍 ", t.muted_style()),
                Span::styled(state.location.as_str(), t.muted_style()),
            ]),
            Line::styled(state.description.as_str(), t.text_style()),
        ])
        .wrap(Wrap { trim: true }),
        about,
    );

    frame.render_widget(
        Paragraph::new(chip_row(["Añadir Interés", "Precios"], 0)),
        chips,
    );
    frame.render_widget(
        Paragraph::new(Line::styled("Reseñas de la comunidad", t.title_style())),
        heading,
    );

    let mut y = reviews.y;
    let bottom = reviews.y + reviews.height;
    for (index, review) in state.reviews.iter().enumerate().skip(selected.saturating_sub(1)) {
        if y >= bottom {
            break;
        }
        let height = ReviewCard::height(review).min(bottom - y);
        let card = Rect { y, height, ..reviews };
        frame.render_widget(ReviewCard::new(review, index == selected), card);
        y += height;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{key, send};
    use crossterm::event::KeyCode;

    #[test]
    fn test_title_comes_from_route() {
        let screen = DetailScreen::new("Cartagena Old City");
        assert_eq!(screen.state().title, "Cartagena Old City");
    }

    #[test]
    fn test_like_increments_selected_review_only() {
        let mut screen = DetailScreen::new("Valle del Cocora");
        let before: Vec<u32> = screen.state().reviews.iter().map(|r| r.likes).collect();
        send(&mut screen, &[key(KeyCode::Down), key(KeyCode::Char(' '))]);
        let after: Vec<u32> = screen.state().reviews.iter().map(|r| r.likes).collect();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[1] + 1);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut screen = DetailScreen::new("Valle del Cocora");
        send(&mut screen, &[key(KeyCode::Up)]);
        assert_eq!(screen.selected(), 0);
        let presses: Vec<_> = (0..5).map(|_| key(KeyCode::Down)).collect();
        send(&mut screen, &presses);
        assert_eq!(screen.selected(), 2);
    }

    #[test]
    fn test_add_review_and_back() {
        let mut screen = DetailScreen::new("Valle del Cocora");
        assert_eq!(
            send(&mut screen, &[key(KeyCode::Char('r'))]),
            ScreenAction::push(Route::Review)
        );
        assert_eq!(send(&mut screen, &[key(KeyCode::Esc)]), ScreenAction::Back);
    }
}
