use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use super::form_field::{FormField, FORM_FIELD_HEIGHT};
use crate::tui::state::Navigable;

/// Outcome of feeding a key to a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Enter was pressed
    Submit,

    /// Focus moved or the focused field changed
    Edited,

    /// Key had no effect
    Ignored,
}

/// A vertical stack of fields with a single focused entry
///
/// Tab/Down and BackTab/Up cycle focus, Enter submits, everything else goes
/// to the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
    focused: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        let mut form = Self { fields, focused: 0 };
        form.sync_focus();
        form
    }

    fn sync_focus(&mut self) {
        let focused = self.focused;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == focused);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Enter => FormAction::Submit,
            KeyCode::Tab | KeyCode::Down => {
                self.next();
                FormAction::Edited
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous();
                FormAction::Edited
            }
            _ => match self
                .fields
                .get_mut(self.focused)
                .map(|field| field.handle_key(key))
            {
                Some(true) => FormAction::Edited,
                _ => FormAction::Ignored,
            },
        }
    }

    /// Value of the field at `index`, empty if out of range
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(FormField::value).unwrap_or("")
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Total rows needed to draw every field
    pub fn height(&self) -> u16 {
        FORM_FIELD_HEIGHT * self.fields.len() as u16
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical(
            self.fields
                .iter()
                .map(|_| Constraint::Length(FORM_FIELD_HEIGHT)),
        )
        .split(area);

        for (field, row) in self.fields.iter().zip(rows.iter()) {
            field.render(frame, *row);
        }
    }
}

impl Navigable for Form {
    fn len(&self) -> usize {
        self.fields.len()
    }

    fn selected(&self) -> usize {
        self.focused
    }

    fn set_selected(&mut self, index: usize) {
        self.focused = index;
        self.sync_focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn two_field_form() -> Form {
        Form::new(vec![FormField::new("Username"), FormField::new("Password")])
    }

    #[test]
    fn test_first_field_focused_initially() {
        let form = two_field_form();
        assert_eq!(form.selected(), 0);
        assert!(form.fields()[0].is_focused);
        assert!(!form.fields()[1].is_focused);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut form = two_field_form();
        assert_eq!(form.handle_key(key(KeyCode::Tab)), FormAction::Edited);
        assert_eq!(form.selected(), 1);
        assert!(form.fields()[1].is_focused);
        assert!(!form.fields()[0].is_focused);

        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.selected(), 0);

        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.selected(), 1);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = two_field_form();
        form.handle_key(key(KeyCode::Char('b')));
        form.handle_key(key(KeyCode::Down));
        form.handle_key(key(KeyCode::Char('p')));
        assert_eq!(form.value(0), "b");
        assert_eq!(form.value(1), "p");
        assert_eq!(form.value(7), "");
    }

    #[test]
    fn test_enter_submits() {
        let mut form = two_field_form();
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit);
    }

    #[test]
    fn test_unhandled_key_ignored() {
        let mut form = two_field_form();
        assert_eq!(form.handle_key(key(KeyCode::Backspace)), FormAction::Ignored);
    }

    #[test]
    fn test_height() {
        assert_eq!(two_field_form().height(), 2 * FORM_FIELD_HEIGHT);
    }
}
