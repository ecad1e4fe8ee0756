//! Explore screen: search, map preview, category chips and a grid of
//! recommended places.

use crate::components::{chip_row, Header, ImagePlaceholder, PlaceCard, HEADER_HEIGHT};
use crate::data::ImageRef;
use crate::keymap::{Action, Keymap};
use crate::nav::Route;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{Category, FeedMsg, FeedState};
use crate::styles::theme;
use crate::utils::{centered_column, focus};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use tracing::{debug, info};

/// Places per row in the recommendations grid
pub const GRID_COLUMNS: usize = 3;

#[derive(Debug, Default)]
pub struct ExploreScreen {
    state: FeedState,
}

impl ExploreScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    fn apply(&mut self, msg: FeedMsg) {
        debug!(msg = ?msg, "Feed update");
        self.state = self.state.update(msg);
    }

    fn move_highlight(&mut self, delta: isize) {
        let len = self.state.places.len();
        let target = self.state.highlighted as isize + delta;
        // Vertical moves past the grid edge stay put
        if delta.unsigned_abs() == GRID_COLUMNS && (target < 0 || target as usize >= len) {
            return;
        }
        let index = focus::clamp_step(self.state.highlighted, delta, len);
        self.apply(FeedMsg::HighlightPlace(index));
    }

    fn cycle_category(&mut self, forward: bool) {
        let current = self.state.category();
        let next = if forward {
            focus::next(&Category::ALL, current)
        } else {
            focus::prev(&Category::ALL, current)
        };
        let index = Category::ALL.iter().position(|c| *c == next).unwrap_or(0);
        self.apply(FeedMsg::SelectCategory(index));
    }
}

impl Screen for ExploreScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        draw_explore(frame, area, &self.state)
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.action_for(&key) {
            Some(Action::NextTab) => self.cycle_category(true),
            Some(Action::PrevTab) => self.cycle_category(false),
            Some(Action::MoveRight) => self.move_highlight(1),
            Some(Action::MoveLeft) => self.move_highlight(-1),
            Some(Action::MoveDown) => self.move_highlight(GRID_COLUMNS as isize),
            Some(Action::MoveUp) => self.move_highlight(-(GRID_COLUMNS as isize)),
            Some(Action::Confirm) => {
                if let Some(place) = self.state.highlighted_place() {
                    info!(location = %place.location, "Opening place details");
                    return Ok(ScreenAction::push(Route::details(place.location.clone())));
                }
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn hints(&self, keymap: &Keymap) -> String {
        keymap.hint(&[
            (Action::NextTab, "Categoría"),
            (Action::MoveRight, "Mover"),
            (Action::Confirm, "Ver lugar"),
            (Action::GoHome, "Inicio"),
            (Action::GoProfile, "Perfil"),
        ])
    }
}

pub fn draw_explore(frame: &mut Frame, area: Rect, state: &FeedState) -> Result<()> {
    let t = theme();
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    Header::render(frame, header, "Explorar", None)?;

    let column = centered_column(body, 78);
    let [search, map, chips, heading, grid] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("🔍 ", t.muted_style()),
            Span::styled("Buscar destinos, hoteles...", t.muted_style()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(t.border_style()),
        ),
        search,
    );

    frame.render_widget(ImagePlaceholder::new(ImageRef::Map), map);

    frame.render_widget(
        Paragraph::new(chip_row(
            Category::ALL.iter().map(|c| c.label()),
            state.selected_category,
        )),
        chips,
    );

    frame.render_widget(
        Paragraph::new(Line::styled("Recomendados para ti", t.title_style())),
        heading,
    );

    let rows = state.places.len().div_ceil(GRID_COLUMNS);
    if rows == 0 {
        return Ok(());
    }
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(grid);
    for (row, chunk) in state.places.chunks(GRID_COLUMNS).enumerate() {
        let cells = Layout::horizontal(vec![
            Constraint::Ratio(1, GRID_COLUMNS as u32);
            GRID_COLUMNS
        ])
        .split(row_areas[row]);
        for (col, place) in chunk.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            frame.render_widget(PlaceCard::new(place, index == state.highlighted), cells[col]);
        }
    }
    Ok(())
}
