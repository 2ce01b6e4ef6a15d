use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use tracing::debug;

use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::state_machine::FlowEvent;
use crate::tui::widgets::common;

/// Progress through the question bank
///
/// Nothing awards points yet: the quiz reports the score it started with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuizState {
    current: usize,
    score: u32,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the question on screen
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Move to the next question, or finish after the last one
    fn advance(&mut self, total: usize) -> ScreenTransition {
        if self.current + 1 < total {
            self.current += 1;
            debug!(question = self.current + 1, total, "next question");
            ScreenTransition::Stay
        } else {
            ScreenTransition::Advance(FlowEvent::QuizFinished { score: self.score })
        }
    }
}

#[async_trait]
impl Screen for QuizState {
    fn render(&self, frame: &mut Frame, context: &AppContext) {
        let total = context.questions.len();
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Quiz");

        let body = Layout::vertical([
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Question
        ])
        .split(chunks[1]);

        let answered = self.current + 1;
        let ratio = if total == 0 { 0.0 } else { answered as f64 / total as f64 };
        let progress = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progress"))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{}/{}", answered, total));
        frame.render_widget(progress, body[0]);

        let prompt = context
            .questions
            .get(self.current)
            .map(|q| q.prompt.as_str())
            .unwrap_or_default();
        let question = Paragraph::new(prompt)
            .alignment(Alignment::Center)
            .style(common::heading_style())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(question, common::centered_band(3, body[1]));

        common::render_help(frame, chunks[2], &[("Enter", "Next Question"), ("q", "Quit")]);
    }

    async fn handle_key(&mut self, context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition> {
        let transition = match key.code {
            KeyCode::Enter | KeyCode::Char('n') => self.advance(context.questions.len()),
            _ => ScreenTransition::Stay,
        };
        Ok(transition)
    }

    async fn on_enter(&mut self, _context: &mut AppContext) -> Result<()> {
        *self = Self::new();
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::Quiz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_then_finishes() {
        let mut quiz = QuizState::new();
        assert_eq!(quiz.advance(3), ScreenTransition::Stay);
        assert_eq!(quiz.current(), 1);
        assert_eq!(quiz.advance(3), ScreenTransition::Stay);
        assert_eq!(quiz.current(), 2);
        assert_eq!(
            quiz.advance(3),
            ScreenTransition::Advance(FlowEvent::QuizFinished { score: 0 })
        );
        // Finishing does not move past the last question
        assert_eq!(quiz.current(), 2);
    }

    #[test]
    fn test_single_question_finishes_immediately() {
        let mut quiz = QuizState::new();
        assert_eq!(
            quiz.advance(1),
            ScreenTransition::Advance(FlowEvent::QuizFinished { score: 0 })
        );
    }

    #[test]
    fn test_score_starts_at_zero() {
        assert_eq!(QuizState::new().score(), 0);
    }
}
