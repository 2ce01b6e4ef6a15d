use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::tui::app::AppContext;
use crate::tui::state_machine::FlowEvent;

/// Screen trait defines the interface for all TUI screens
///
/// Methods take `&mut self` for the screen's own state and `context` for
/// app-level state, so the two can be borrowed independently.
///
/// A screen never changes the active screen itself: it reports what happened
/// through [`ScreenTransition`] and the flow controller decides.
#[async_trait]
pub trait Screen: Send {
    /// Render this screen to the terminal frame
    fn render(&self, frame: &mut Frame, context: &AppContext);

    /// Handle keyboard input and report the outcome
    async fn handle_key(&mut self, context: &mut AppContext, key: KeyEvent) -> Result<ScreenTransition>;

    /// Called when this screen becomes active
    ///
    /// Screens reset their local state here, so every visit starts fresh.
    async fn on_enter(&mut self, context: &mut AppContext) -> Result<()> {
        let _ = context;
        Ok(())
    }

    /// Called when this screen stops being active (navigation or shutdown)
    async fn on_exit(&mut self, context: &mut AppContext) -> Result<()> {
        let _ = context;
        Ok(())
    }

    fn id(&self) -> ScreenId;
}

/// Result of handling input on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Nothing for the flow controller to do
    Stay,

    /// Hand a flow event to the controller
    Advance(FlowEvent),

    /// Quit the application
    Quit,
}

/// Screen identifier for each screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Splash,
    LoginOrRegister,
    Login,
    Register,
    GameRules,
    Quiz,
    Result,
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Splash,
        ScreenId::LoginOrRegister,
        ScreenId::Login,
        ScreenId::Register,
        ScreenId::GameRules,
        ScreenId::Quiz,
        ScreenId::Result,
    ];

    /// Whether the screen takes free text, in which case `q` is typed rather than quitting
    pub fn accepts_text(&self) -> bool {
        matches!(self, ScreenId::Login | ScreenId::Register)
    }
}
