use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::state_machine::FlowEvent;
use crate::tui::widgets::common;

pub const RULES: [&str; 3] = [
    "1. Answer all questions to the best of your ability.",
    "2. Some questions have multiple correct answers.",
    "3. Confirm your answer before proceeding.",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameRulesState;

impl GameRulesState {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Screen for GameRulesState {
    fn render(&self, frame: &mut Frame, _context: &AppContext) {
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Quiz Rules");

        let mut lines = vec![Line::from("")];
        lines.extend(RULES.iter().map(|rule| Line::from(*rule)));

        let rules = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(rules, chunks[1]);

        common::render_help(frame, chunks[2], &[("Enter", "Start Quiz"), ("q", "Quit")]);
    }

    async fn handle_key(&mut self, _context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition> {
        let transition = match key.code {
            KeyCode::Enter | KeyCode::Char('s') => ScreenTransition::Advance(FlowEvent::StartQuiz),
            _ => ScreenTransition::Stay,
        };
        Ok(transition)
    }

    fn id(&self) -> ScreenId {
        ScreenId::GameRules
    }
}
