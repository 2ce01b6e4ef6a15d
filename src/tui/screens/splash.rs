use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::tui::app::{AppContext, AppEvent};
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::widgets::common;

const LOGO: &str = include_str!("../../../assets/logo.txt");
pub const WELCOME: &str = "Welcome to QuizApp!";

/// Splash screen with a one-shot timer
///
/// Each mount gets its own generation number and timer task. Unmounting
/// aborts the task and forgets the generation, so a timer that already fired
/// but has not been handled yet is ignored too.
#[derive(Debug, Default)]
pub struct SplashState {
    timer: Option<JoinHandle<()>>,
    mounts: u64,
    live_mount: Option<u64>,
}

impl SplashState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `mount` is the generation currently on screen
    pub fn is_live_mount(&self, mount: u64) -> bool {
        self.live_mount == Some(mount)
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.live_mount = None;
    }
}

impl Drop for SplashState {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[async_trait]
impl Screen for SplashState {
    fn render(&self, frame: &mut Frame, _context: &AppContext) {
        let mut lines: Vec<Line> = LOGO
            .lines()
            .map(|l| Line::from(l.to_string()).style(Style::default().fg(Color::Yellow)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(WELCOME).style(common::heading_style()));

        let area = common::centered_band(lines.len() as u16, frame.area());
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    async fn handle_key(&mut self, _context: &mut AppContext, _key: KeyEvent) -> Result<ScreenTransition> {
        // The splash cannot be skipped
        Ok(ScreenTransition::Stay)
    }

    async fn on_enter(&mut self, context: &mut AppContext) -> Result<()> {
        self.cancel();
        self.mounts += 1;
        let mount = self.mounts;
        self.live_mount = Some(mount);

        let delay = context.config.splash_delay;
        let events = context.event_sender();
        debug!(mount, ?delay, "scheduling splash timeout");
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::SplashElapsed { mount });
        }));
        Ok(())
    }

    async fn on_exit(&mut self, _context: &mut AppContext) -> Result<()> {
        self.cancel();
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::Splash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_live_mount_before_enter() {
        let splash = SplashState::new();
        assert!(!splash.is_live_mount(0));
        assert!(!splash.is_live_mount(1));
        assert!(!splash.is_timer_pending());
    }

    #[test]
    fn test_logo_is_embedded() {
        assert!(!LOGO.trim().is_empty());
    }
}
