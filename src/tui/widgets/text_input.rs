use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MASK_CHAR: char = '•';
const CURSOR_CHAR: char = '█';

/// A single-line text input with cursor support
///
/// This widget provides:
/// - Character-by-character input handling
/// - Cursor position tracking (in characters, so multi-byte input is safe)
/// - Masked display for secrets
/// - Visual feedback for focus state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,

    /// Placeholder text shown when empty
    pub placeholder: String,

    /// Render every character as a bullet
    pub masked: bool,

    /// Cursor position as a character index
    cursor_pos: usize,

    pub is_focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Hide the value behind bullets (passwords)
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor_pos = self.char_len();
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the given character index
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Handle keyboard input
    ///
    /// Returns true if the value or cursor changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let at = self.byte_index(self.cursor_pos);
                self.value.insert(at, c);
                self.cursor_pos += 1;
                true
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                let at = self.byte_index(self.cursor_pos - 1);
                self.value.remove(at);
                self.cursor_pos -= 1;
                true
            }
            KeyCode::Delete if self.cursor_pos < self.char_len() => {
                let at = self.byte_index(self.cursor_pos);
                self.value.remove(at);
                true
            }
            KeyCode::Left if self.cursor_pos > 0 => {
                self.cursor_pos -= 1;
                true
            }
            KeyCode::Right if self.cursor_pos < self.char_len() => {
                self.cursor_pos += 1;
                true
            }
            KeyCode::Home if self.cursor_pos > 0 => {
                self.cursor_pos = 0;
                true
            }
            KeyCode::End if self.cursor_pos < self.char_len() => {
                self.cursor_pos = self.char_len();
                true
            }
            _ => false,
        }
    }

    /// Text as it should appear on screen (masked, with cursor when focused)
    pub fn display_text(&self) -> String {
        let mut chars: Vec<char> = if self.masked {
            std::iter::repeat(MASK_CHAR).take(self.char_len()).collect()
        } else {
            self.value.chars().collect()
        };
        if self.is_focused {
            chars.insert(self.cursor_pos.min(chars.len()), CURSOR_CHAR);
        }
        chars.into_iter().collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default().borders(Borders::ALL).style(border_style);

        let line = if self.value.is_empty() && !self.is_focused {
            Line::from(self.placeholder.clone()).style(Style::default().fg(Color::DarkGray))
        } else {
            Line::from(self.display_text())
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) -> bool {
        input.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn test_typing_appends() {
        let mut input = TextInput::new();
        assert!(press(&mut input, KeyCode::Char('h')));
        assert!(press(&mut input, KeyCode::Char('i')));
        assert_eq!(input.value(), "hi");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new().with_value("abc");
        assert!(press(&mut input, KeyCode::Backspace));
        assert_eq!(input.value(), "ab");

        press(&mut input, KeyCode::Home);
        assert!(press(&mut input, KeyCode::Delete));
        assert_eq!(input.value(), "b");

        // Nothing left of the cursor
        assert!(!press(&mut input, KeyCode::Backspace));
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInput::new().with_value("ac");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('b'));
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().with_value("Zoë");
        assert_eq!(input.cursor_pos(), 3);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "Zo");
        press(&mut input, KeyCode::Char('é'));
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('x'));
        assert_eq!(input.value(), "Zoxé");
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(input.is_empty());
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new().masked().with_value("secret");
        assert_eq!(input.display_text(), "••••••");
        input.set_focused(true);
        assert_eq!(input.display_text(), "••••••█");
        assert_eq!(input.value(), "secret");
    }

    #[test]
    fn test_cursor_shown_at_position() {
        let mut input = TextInput::new().with_value("abc");
        input.set_focused(true);
        press(&mut input, KeyCode::Home);
        assert_eq!(input.display_text(), "█abc");
    }
}
