mod common;

use common::key;
use condor::config::Config;
use condor::keymap::{Action, KeyBinding, Keymap, KeymapPreset};
use condor::{Route, Router};
use crossterm::event::{KeyCode, KeyModifiers};
use tempfile::TempDir;

fn vim_with_overrides() -> Keymap {
    Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![
            KeyBinding::new("w", Action::MoveUp),
            KeyBinding::new("z", Action::Quit),
        ],
    }
}

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config {
        keymap: vim_with_overrides(),
        ..Config::default()
    };
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);
    assert!(loaded
        .keymap
        .overrides
        .iter()
        .any(|b| b.key == "z" && b.action == Action::Quit));

    let keymap = &loaded.keymap;
    assert_eq!(keymap.get_action(KeyCode::Char('z'), KeyModifiers::NONE), Some(Action::Quit));
    assert_eq!(keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE), Some(Action::MoveUp));
    // Preset keys for overridden actions are shadowed
    assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    // Everything else keeps the preset binding
    assert_eq!(keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE), Some(Action::MoveDown));
    assert_eq!(keymap.get_action(KeyCode::Enter, KeyModifiers::NONE), Some(Action::Confirm));
}

#[test]
fn test_overrides_written_by_hand() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
theme = "dark"

[keymap]
preset = "emacs"

[[keymap.overrides]]
key = "ctrl+l"
action = "like"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('l'), KeyModifiers::CONTROL),
        Some(Action::Like)
    );
    // The plain `l` and `space` bindings for Like are shadowed
    assert_eq!(config.keymap.get_action(KeyCode::Char(' '), KeyModifiers::NONE), None);
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = vim_with_overrides();
    assert_eq!(keymap.get_key_display_for_action(Action::MoveUp), "W");
    assert_eq!(keymap.get_key_display_for_action(Action::Quit), "Z");
    assert_eq!(keymap.get_key_display_for_action(Action::Confirm), "Enter");
    assert!(keymap.hint(&[(Action::Quit, "Salir")]).contains("Salir: Z"));
}

#[test]
fn test_router_follows_overrides() {
    let mut router = Router::new(Route::Home, vim_with_overrides());
    assert!(router.dispatch(key(KeyCode::Char('q'))).unwrap());
    assert_eq!(router.current_route(), &Route::Home);
    assert!(!router.dispatch(key(KeyCode::Char('z'))).unwrap());
}
