//! Condor - a terminal rendition of the Condor travel app prototype
//!
//! Screens for signing in, browsing a feed of traveller posts, exploring
//! recommended places, reading and writing reviews, and managing a profile.
//! All data is static sample data; nothing is persisted except the tool
//! configuration.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod data;
pub mod keymap;
pub mod nav;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

pub use app::{App, Router};
pub use config::Config;
pub use nav::{NavOptions, Navigator, Route, RouteKind};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
