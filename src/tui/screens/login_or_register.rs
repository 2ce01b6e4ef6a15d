use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::state::Navigable;
use crate::tui::state_machine::FlowEvent;
use crate::tui::widgets::common;

const CHOICES: [(&str, FlowEvent); 2] = [
    ("Log In", FlowEvent::ChooseLogin),
    ("Register", FlowEvent::ChooseRegister),
];

/// Choice between logging in and registering
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginOrRegisterState {
    selected: usize,
}

impl LoginOrRegisterState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigable for LoginOrRegisterState {
    fn len(&self) -> usize {
        CHOICES.len()
    }

    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, index: usize) {
        self.selected = index;
    }
}

#[async_trait]
impl Screen for LoginOrRegisterState {
    fn render(&self, frame: &mut Frame, _context: &AppContext) {
        let chunks = common::render_screen_layout(frame.area());
        common::render_title(frame, chunks[0], "Welcome to QuizApp");

        let items: Vec<ListItem> = CHOICES
            .iter()
            .enumerate()
            .map(|(i, (label, _))| {
                let (prefix, style) = common::selection_style(i == self.selected);
                ListItem::new(format!("{}{}", prefix, label)).style(style)
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL));
        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        let area = common::centered_rect(60, 50, chunks[1]);
        frame.render_stateful_widget(list, area, &mut list_state);

        common::render_help(
            frame,
            chunks[2],
            &[("↑/↓", "Navigate"), ("Enter", "Select"), ("l", "Log In"), ("r", "Register"), ("q", "Quit")],
        );
    }

    async fn handle_key(&mut self, _context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition> {
        let transition = match key.code {
            KeyCode::Up => {
                self.previous();
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Tab => {
                self.next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => ScreenTransition::Advance(CHOICES[self.selected].1),
            KeyCode::Char('l') => ScreenTransition::Advance(FlowEvent::ChooseLogin),
            KeyCode::Char('r') => ScreenTransition::Advance(FlowEvent::ChooseRegister),
            _ => ScreenTransition::Stay,
        };
        Ok(transition)
    }

    async fn on_enter(&mut self, _context: &mut AppContext) -> Result<()> {
        *self = Self::new();
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::LoginOrRegister
    }
}
