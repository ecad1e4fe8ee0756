//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Enter, Esc)
    #[default]
    Standard,
    /// Vim-style navigation (hjkl, etc.)
    Vim,
    /// Emacs-style navigation (Ctrl+N/P, etc.)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => standard_navigation(),
            KeymapPreset::Vim => vim_navigation(),
            KeymapPreset::Emacs => emacs_navigation(),
        };
        bindings.extend(shared_bindings());
        bindings
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("l", Action::Like),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

/// Vim-style keyboard bindings (hjkl navigation)
fn vim_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("0", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("$", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

/// Emacs-style keyboard bindings (Ctrl+N/P navigation)
fn emacs_navigation() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("l", Action::Like),
        KeyBinding::new("ctrl+d", Action::DeleteChar), // Forward delete (Emacs standard)
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

/// Bindings identical across presets
fn shared_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("t", Action::ToggleTheme),
        KeyBinding::new("1", Action::GoHome),
        KeyBinding::new("2", Action::GoExplore),
        KeyBinding::new("3", Action::GoProfile),
        // Actions
        KeyBinding::new("space", Action::Like),
        KeyBinding::new("n", Action::OpenNotifications),
        KeyBinding::new("e", Action::Edit),
        KeyBinding::new("r", Action::AddReview),
        KeyBinding::new("x", Action::ClearAll),
        KeyBinding::new("ctrl+r", Action::ToggleVisibility),
        KeyBinding::new("ctrl+s", Action::Save),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        // Field navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("backtab", Action::PrevTab),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(KeymapPreset::Standard.name(), "Standard");
        assert_eq!(KeymapPreset::Vim.name(), "Vim");
        assert_eq!(KeymapPreset::Emacs.name(), "Emacs");
    }

    #[test]
    fn test_standard_bindings_complete() {
        let bindings = KeymapPreset::Standard.bindings();
        for action in [
            Action::MoveUp,
            Action::MoveDown,
            Action::Confirm,
            Action::Cancel,
            Action::Quit,
            Action::Help,
            Action::Like,
            Action::ClearAll,
        ] {
            assert!(bindings.iter().any(|b| b.action == action), "{:?}", action);
        }
    }

    #[test]
    fn test_vim_has_hjkl() {
        let bindings = KeymapPreset::Vim.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "j" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "k" && b.action == Action::MoveUp));
        assert!(bindings
            .iter()
            .any(|b| b.key == "h" && b.action == Action::MoveLeft));
        assert!(bindings
            .iter()
            .any(|b| b.key == "l" && b.action == Action::MoveRight));
    }

    #[test]
    fn test_emacs_has_ctrl_np() {
        let bindings = KeymapPreset::Emacs.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+n" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+p" && b.action == Action::MoveUp));
    }

    #[test]
    fn test_preset_serialization() {
        let json = serde_json::to_string(&KeymapPreset::Vim).unwrap();
        assert_eq!(json, "\"vim\"");
        let preset: KeymapPreset = serde_json::from_str("\"emacs\"").unwrap();
        assert_eq!(preset, KeymapPreset::Emacs);
    }
}
