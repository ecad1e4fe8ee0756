use crate::keymap::Action;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single-line text buffer with a character-indexed cursor.
///
/// Screens keep one of these for the focused form field. After each edit the
/// screen copies `text()` into its state record through a `*Changed` message.
///
/// # Example
/// ```
/// use condor::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('ñ');
/// input.insert_char('o');
/// assert_eq!(input.text(), "ño");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text and the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Create a text input with the cursor at `cursor`, clamped to the text.
    pub fn with_cursor(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.chars().count());
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Set the text and move cursor to end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        handle_char_insertion(&mut self.text, &mut self.cursor, c);
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        handle_backspace(&mut self.text, &mut self.cursor);
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        handle_delete(&mut self.text, &mut self.cursor);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handle an editing action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Handle a raw key press.
    ///
    /// Returns true if the key was handled.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(c)
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Try the mapped action first, then fall back to the raw key.
    ///
    /// Printable characters are always typed, so vim's `h`/`l` or `0`/`$`
    /// insert text instead of moving the cursor.
    ///
    /// Returns true when the text or cursor may have changed.
    pub fn handle_key_with_action(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Option<Action>,
    ) -> bool {
        let printable = matches!(code, KeyCode::Char(_))
            && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if printable {
            return self.handle_key(code, modifiers);
        }
        if let Some(action) = action {
            if self.handle_action(action) {
                return true;
            }
        }
        self.handle_key(code, modifiers)
    }

    /// Whether a mapped action should still run while a text field has focus.
    ///
    /// Everything else (for example `q` bound to Quit) is typed as text.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextTab
                | Action::PrevTab
                | Action::MoveUp
                | Action::MoveDown
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
                | Action::ToggleVisibility
                | Action::Save
        )
    }
}

fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .map(|(i, _)| i)
        .nth(cursor)
        .unwrap_or(text.len())
}

fn handle_char_insertion(text: &mut String, cursor: &mut usize, c: char) {
    if c.is_control() {
        return;
    }
    text.insert(byte_index(text, *cursor), c);
    *cursor = (*cursor + 1).min(text.chars().count());
}

fn handle_backspace(text: &mut String, cursor: &mut usize) {
    if *cursor > 0 {
        text.remove(byte_index(text, *cursor - 1));
        *cursor -= 1;
    }
}

fn handle_delete(text: &mut String, cursor: &mut usize) {
    if *cursor < text.chars().count() {
        text.remove(byte_index(text, *cursor));
    }
}
