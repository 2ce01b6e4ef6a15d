use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};
use tracing::{debug, info};

use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::state::ErrorMessage;
use crate::tui::state_machine::FlowEvent;
use crate::tui::validation::validate_login;
use crate::tui::widgets::{common, Form, FormAction, FormField, TextInput};

const USERNAME: usize = 0;
const PASSWORD: usize = 1;

/// Login form. Owns its fields and inline error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginState {
    pub form: Form,
    pub error: ErrorMessage,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Username").required(),
                FormField::new("Password")
                    .required()
                    .with_input(TextInput::new().with_placeholder("Password").masked()),
            ]),
            error: ErrorMessage::new(),
        }
    }

    pub fn username(&self) -> &str {
        self.form.value(USERNAME)
    }

    pub fn password(&self) -> &str {
        self.form.value(PASSWORD)
    }

    fn submit(&mut self) -> ScreenTransition {
        let outcome = validate_login(self.username(), self.password());
        match outcome {
            Ok(()) => {
                self.error.clear();
                info!("login accepted");
                ScreenTransition::Advance(FlowEvent::LoginAccepted)
            }
            Err(err) => {
                debug!(%err, "login rejected");
                self.error.set(err.to_string());
                ScreenTransition::Stay
            }
        }
    }
}

#[async_trait]
impl Screen for LoginState {
    fn render(&self, frame: &mut Frame, _context: &AppContext) {
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Login");

        let body = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(2), // Error
            Constraint::Min(0),
        ])
        .split(common::centered_rect(60, 100, chunks[1]));

        self.form.render(frame, body[0]);
        self.error.render(frame, body[1]);

        common::render_help(
            frame,
            chunks[2],
            &[("Tab/↑/↓", "Next field"), ("Enter", "Login"), ("Ctrl+C", "Quit")],
        );
    }

    async fn handle_key(&mut self, _context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition> {
        let transition = match self.form.handle_key(key) {
            FormAction::Submit => self.submit(),
            FormAction::Edited | FormAction::Ignored => ScreenTransition::Stay,
        };
        Ok(transition)
    }

    async fn on_enter(&mut self, _context: &mut AppContext) -> Result<()> {
        *self = Self::new();
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::Login
    }
}
