//! Name-entry overlay state.

use derive_getters::Getters;
use tictally_game::Intent;

/// Field that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameField {
    /// Name of the X player.
    #[default]
    X,
    /// Name of the O player.
    O,
}

/// Longest name the overlay accepts.
pub const MAX_NAME_LEN: usize = 24;

/// Two text fields shown before the first game.
#[derive(Debug, Clone, Default, Getters)]
pub struct NameEntry {
    /// X player's name as typed.
    x: String,
    /// O player's name as typed.
    o: String,
    /// Focused field.
    focus: NameField,
}

impl NameEntry {
    /// Creates an empty overlay focused on the X field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character to the focused field.
    pub fn push(&mut self, c: char) {
        let field = self.focused_mut();
        if field.chars().count() < MAX_NAME_LEN && !c.is_control() {
            field.push(c);
        }
    }

    /// Deletes the last character of the focused field.
    pub fn pop(&mut self) {
        self.focused_mut().pop();
    }

    /// Switches focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            NameField::X => NameField::O,
            NameField::O => NameField::X,
        };
    }

    /// True once both names are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.x.trim().is_empty() && !self.o.trim().is_empty()
    }

    /// Builds the intent that submits both names.
    pub fn intent(&self) -> Intent {
        Intent::SetPlayers {
            x: self.x.clone(),
            o: self.o.clone(),
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::X => &mut self.x,
            NameField::O => &mut self.o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut entry = NameEntry::new();
        "Al".chars().for_each(|c| entry.push(c));
        entry.toggle_focus();
        "Bo".chars().for_each(|c| entry.push(c));
        entry.pop();

        assert_eq!(entry.x(), "Al");
        assert_eq!(entry.o(), "B");
        assert_eq!(*entry.focus(), NameField::O);
    }

    #[test]
    fn test_complete_requires_both_trimmed() {
        let mut entry = NameEntry::new();
        entry.push('A');
        assert!(!entry.is_complete());
        entry.toggle_focus();
        entry.push(' ');
        assert!(!entry.is_complete());
        entry.push('B');
        assert!(entry.is_complete());
    }

    #[test]
    fn test_length_capped() {
        let mut entry = NameEntry::new();
        for _ in 0..MAX_NAME_LEN + 5 {
            entry.push('a');
        }
        assert_eq!(entry.x().len(), MAX_NAME_LEN);
    }
}
