use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::text_input::TextInput;

/// Rows a field occupies: one for the label, three for the bordered input
pub const FORM_FIELD_HEIGHT: u16 = 4;

/// A labelled text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub input: TextInput,

    /// Shows a `*` after the label
    pub required: bool,

    pub is_focused: bool,
}

impl FormField {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            input: TextInput::new().with_placeholder(label.clone()),
            label,
            required: false,
            is_focused: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Replace the input widget (e.g. with a masked one)
    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input;
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
        self.input.set_focused(focused);
    }

    /// Returns true if the input was modified
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.input.handle_key(key)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input
        ])
        .split(area);

        let label_style = if self.is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label_text, label_style))),
            chunks[0],
        );
        self.input.render(frame, chunks[1]);
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}
