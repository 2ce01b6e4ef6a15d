use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::state_machine::FlowEvent;
use crate::tui::widgets::common;

pub fn score_line(score: u32) -> String {
    format!("Your Score: {}", score)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResultState;

impl ResultState {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Screen for ResultState {
    fn render(&self, frame: &mut Frame, context: &AppContext) {
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Result");

        let score = Paragraph::new(score_line(context.flow.score()))
            .alignment(Alignment::Center)
            .style(common::heading_style())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(score, common::centered_band(3, chunks[1]));

        common::render_help(frame, chunks[2], &[("Enter", "Play Again"), ("q", "Quit")]);
    }

    async fn handle_key(&mut self, _context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition> {
        let transition = match key.code {
            KeyCode::Enter | KeyCode::Char('p') => ScreenTransition::Advance(FlowEvent::PlayAgain),
            _ => ScreenTransition::Stay,
        };
        Ok(transition)
    }

    fn id(&self) -> ScreenId {
        ScreenId::Result
    }
}
