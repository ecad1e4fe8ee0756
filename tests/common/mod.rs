//! Shared helpers for driving a [`Router`] without a real terminal.

#![allow(dead_code)]

use condor::{Keymap, Route, Router};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn router_at(start: Route) -> Router {
    Router::new(start, Keymap::default())
}

/// Dispatch every event, failing the test if the router asks to quit
pub fn press(router: &mut Router, events: &[Event]) {
    for event in events {
        let keep_running = router.dispatch(event.clone()).unwrap();
        assert!(keep_running, "router quit on {:?}", event);
    }
}

pub fn type_text(router: &mut Router, text: &str) {
    let events: Vec<Event> = text.chars().map(|c| key(KeyCode::Char(c))).collect();
    press(router, &events);
}

/// Draw one frame and return the buffer as text, one line per row
pub fn screen_text(router: &mut Router, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| router.draw(frame).unwrap()).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
