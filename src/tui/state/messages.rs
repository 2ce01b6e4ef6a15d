//! Inline error message held by a form screen
//!
//! A form shows at most one error beneath its fields. It is replaced on every
//! failed submit and cleared on a successful one.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// # Example
/// ```
/// use quiz_app::tui::state::ErrorMessage;
///
/// let mut error = ErrorMessage::default();
/// error.set("All fields are required.");
/// assert_eq!(error.message(), Some("All fields are required."));
///
/// error.clear();
/// assert!(error.message().is_none());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    message: Option<String>,
}

impl ErrorMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message
    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.message.is_some()
    }

    /// Draw the message in red; draws nothing when unset
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(msg) = &self.message {
            let widget = Paragraph::new(msg.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Red));
            frame.render_widget(widget, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let error = ErrorMessage::new();
        assert!(!error.is_set());
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_set_replaces_previous() {
        let mut error = ErrorMessage::new();
        error.set("All fields are required.");
        error.set("Invalid email address.");
        assert_eq!(error.message(), Some("Invalid email address."));
    }

    #[test]
    fn test_clear() {
        let mut error = ErrorMessage::new();
        error.set("Invalid email address.");
        error.clear();
        assert!(!error.is_set());
    }
}
