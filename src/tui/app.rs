use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::models::{AppConfig, QuestionBank};
use super::screen_trait::{Screen, ScreenId, ScreenTransition};
use super::screens;
use super::state_machine::{FlowEvent, ScreenStateMachine};

/// Events produced off the input path (timers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The splash delay for mount number `mount` ran out
    SplashElapsed { mount: u64 },
}

/// Context that screens need access to (everything except screen states)
pub struct AppContext {
    pub config: AppConfig,
    pub questions: QuestionBank,
    pub flow: ScreenStateMachine,
    pub should_quit: bool,
    events: UnboundedSender<AppEvent>,
}

impl AppContext {
    /// Sender for scheduling app events from background tasks
    pub fn event_sender(&self) -> UnboundedSender<AppEvent> {
        self.events.clone()
    }
}

/// Container for all screen states
pub struct ScreenStates {
    pub splash: screens::SplashState,
    pub login_or_register: screens::LoginOrRegisterState,
    pub login: screens::LoginState,
    pub register: screens::RegisterState,
    pub game_rules: screens::GameRulesState,
    pub quiz: screens::QuizState,
    pub result: screens::ResultState,
}

impl ScreenStates {
    fn new() -> Self {
        Self {
            splash: screens::SplashState::new(),
            login_or_register: screens::LoginOrRegisterState::new(),
            login: screens::LoginState::new(),
            register: screens::RegisterState::new(),
            game_rules: screens::GameRulesState::new(),
            quiz: screens::QuizState::new(),
            result: screens::ResultState::new(),
        }
    }

    /// The single router from screen id to screen state
    pub fn get(&self, id: ScreenId) -> &dyn Screen {
        match id {
            ScreenId::Splash => &self.splash,
            ScreenId::LoginOrRegister => &self.login_or_register,
            ScreenId::Login => &self.login,
            ScreenId::Register => &self.register,
            ScreenId::GameRules => &self.game_rules,
            ScreenId::Quiz => &self.quiz,
            ScreenId::Result => &self.result,
        }
    }

    pub fn get_mut(&mut self, id: ScreenId) -> &mut dyn Screen {
        match id {
            ScreenId::Splash => &mut self.splash,
            ScreenId::LoginOrRegister => &mut self.login_or_register,
            ScreenId::Login => &mut self.login,
            ScreenId::Register => &mut self.register,
            ScreenId::GameRules => &mut self.game_rules,
            ScreenId::Quiz => &mut self.quiz,
            ScreenId::Result => &mut self.result,
        }
    }
}

pub struct App {
    pub context: AppContext,
    pub states: ScreenStates,
    events: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let questions = QuestionBank::builtin()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            context: AppContext {
                config,
                questions,
                flow: ScreenStateMachine::new(),
                should_quit: false,
                events: tx,
            },
            states: ScreenStates::new(),
            events: rx,
        })
    }

    /// Mount the initial screen (starts the splash timer)
    pub async fn start(&mut self) -> Result<()> {
        let current = self.context.flow.current();
        info!(screen = ?current, "starting");
        self.states.get_mut(current).on_enter(&mut self.context).await
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.start().await?;

        while !self.context.should_quit {
            self.drain_events().await?;

            terminal.draw(|frame| {
                let current = self.context.flow.current();
                self.states.get(current).render(frame, &self.context);
            })?;

            // Handle input with timeout
            if event::poll(self.context.config.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Handle every app event that is already queued, without waiting
    async fn drain_events(&mut self) -> Result<()> {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event).await?;
        }
        Ok(())
    }

    /// Wait for the next app event
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events.recv().await
    }

    pub async fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::SplashElapsed { mount } => {
                let on_splash = self.context.flow.current() == ScreenId::Splash;
                if on_splash && self.states.splash.is_live_mount(mount) {
                    self.advance(FlowEvent::SplashElapsed).await?;
                } else {
                    debug!(mount, "ignoring splash timer from a torn down mount");
                }
            }
        }
        Ok(())
    }

    /// Feed a key press to the active screen and act on its transition
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.quit().await;
        }

        let current = self.context.flow.current();
        if key.code == KeyCode::Char('q') && !current.accepts_text() {
            return self.quit().await;
        }

        let transition = self
            .states
            .get_mut(current)
            .handle_key(&mut self.context, key)
            .await?;

        match transition {
            ScreenTransition::Stay => Ok(()),
            ScreenTransition::Advance(event) => self.advance(event).await,
            ScreenTransition::Quit => self.quit().await,
        }
    }

    /// Apply a flow event, unmounting the old screen and mounting the new one
    ///
    /// The controller only moves once both hooks have succeeded. A hook error
    /// leaves it on the old screen and ends the loop.
    pub(crate) async fn advance(&mut self, event: FlowEvent) -> Result<()> {
        let from = self.context.flow.current();
        let Some(to) = ScreenStateMachine::next_screen(from, event) else {
            self.context.flow.apply(event);
            return Ok(());
        };

        self.states.get_mut(from).on_exit(&mut self.context).await?;
        self.states.get_mut(to).on_enter(&mut self.context).await?;
        debug!(screen = ?self.states.get(to).id(), "mounted");

        self.context.flow.apply(event);
        Ok(())
    }

    /// Stop the loop and tear down the active screen
    pub async fn quit(&mut self) -> Result<()> {
        if self.context.should_quit {
            return Ok(());
        }
        info!("quitting");
        self.context.should_quit = true;
        let current = self.context.flow.current();
        self.states.get_mut(current).on_exit(&mut self.context).await
    }
}
