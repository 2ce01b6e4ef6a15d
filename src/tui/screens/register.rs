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
use crate::tui::validation::{validate_registration, Registration};
use crate::tui::widgets::{common, Form, FormAction, FormField, TextInput};

pub const FIRST_NAME: usize = 0;
pub const FAMILY_NAME: usize = 1;
pub const DATE_OF_BIRTH: usize = 2;
pub const EMAIL: usize = 3;
pub const PASSWORD: usize = 4;

/// Registration form. Nothing is stored; a valid form just returns to the choice screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterState {
    pub form: Form,
    pub error: ErrorMessage,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterState {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("First Name").required(),
                FormField::new("Family Name").required(),
                FormField::new("Date of Birth").required(),
                FormField::new("Email").required(),
                FormField::new("Password")
                    .required()
                    .with_input(TextInput::new().with_placeholder("Password").masked()),
            ]),
            error: ErrorMessage::new(),
        }
    }

    pub fn registration(&self) -> Registration<'_> {
        Registration {
            first_name: self.form.value(FIRST_NAME),
            family_name: self.form.value(FAMILY_NAME),
            date_of_birth: self.form.value(DATE_OF_BIRTH),
            email: self.form.value(EMAIL),
            password: self.form.value(PASSWORD),
        }
    }

    fn submit(&mut self) -> ScreenTransition {
        let outcome = validate_registration(&self.registration());
        match outcome {
            Ok(()) => {
                self.error.clear();
                info!("registration accepted");
                ScreenTransition::Advance(FlowEvent::RegistrationAccepted)
            }
            Err(err) => {
                debug!(%err, "registration rejected");
                self.error.set(err.to_string());
                ScreenTransition::Stay
            }
        }
    }
}

#[async_trait]
impl Screen for RegisterState {
    fn render(&self, frame: &mut Frame, _context: &AppContext) {
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Register");

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
            &[("Tab/↑/↓", "Next field"), ("Enter", "Register"), ("Ctrl+C", "Quit")],
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
        ScreenId::Register
    }
}
