//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list or to the previous field
    MoveUp,
    /// Move selection down in a list or to the next field
    MoveDown,
    /// Move left (chips, tabs, stars, cursor)
    MoveLeft,
    /// Move right (chips, tabs, stars, cursor)
    MoveRight,
    /// Jump to start of line/input
    Home,
    /// Jump to end of line/input
    End,

    // ============ Selection & Confirmation ============
    /// Activate the focused button or card (Enter)
    Confirm,
    /// Go back (Esc)
    Cancel,

    // ============ Global ============
    Quit,
    Help,
    /// Switch between light and dark palettes
    ToggleTheme,
    /// Bottom bar: Home tab
    GoHome,
    /// Bottom bar: Explore tab
    GoExplore,
    /// Bottom bar: Profile tab
    GoProfile,

    // ============ Screen-specific actions ============
    /// Like the selected review
    Like,
    /// Open notifications from the home feed
    OpenNotifications,
    /// Edit profile
    Edit,
    /// Write a review for the current place
    AddReview,
    /// Clear all notifications
    ClearAll,
    /// Show or hide the password
    ToggleVisibility,
    /// Save / submit form
    Save,

    // ============ Text editing ============
    Backspace,
    DeleteChar,

    // ============ Field navigation ============
    NextTab,
    PrevTab,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Home",
            Action::End => "End",
            Action::Confirm => "Confirm",
            Action::Cancel => "Go back",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::ToggleTheme => "Toggle light/dark theme",
            Action::GoHome => "Home tab",
            Action::GoExplore => "Explore tab",
            Action::GoProfile => "Profile tab",
            Action::Like => "Like review",
            Action::OpenNotifications => "Notifications",
            Action::Edit => "Edit profile",
            Action::AddReview => "Write a review",
            Action::ClearAll => "Clear all notifications",
            Action::ToggleVisibility => "Show/hide password",
            Action::Save => "Save",
            Action::Backspace => "Delete previous character",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
        }
    }

    /// Get the category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End
            | Action::NextTab
            | Action::PrevTab => "Navigation",
            Action::Confirm | Action::Cancel => "Selection",
            Action::Quit
            | Action::Help
            | Action::ToggleTheme
            | Action::GoHome
            | Action::GoExplore
            | Action::GoProfile => "Global",
            Action::Like
            | Action::OpenNotifications
            | Action::Edit
            | Action::AddReview
            | Action::ClearAll
            | Action::ToggleVisibility
            | Action::Save => "Actions",
            Action::Backspace | Action::DeleteChar => "Text Editing",
        }
    }
}
