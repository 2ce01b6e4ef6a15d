use tracing::{debug, info};

use crate::tui::screen_trait::ScreenId;

/// Something that happened on a screen and may move the flow forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    SplashElapsed,
    ChooseLogin,
    ChooseRegister,
    LoginAccepted,
    RegistrationAccepted,
    StartQuiz,
    QuizFinished { score: u32 },
    PlayAgain,
}

/// ScreenStateMachine is the flow controller
///
/// It owns the active screen and the last reported score. Screens are owned
/// by the App; only navigation state lives here.
///
/// The flow is a cycle with no terminal state:
/// Splash → LoginOrRegister → (Login → GameRules | Register → LoginOrRegister),
/// GameRules → Quiz → Result → GameRules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenStateMachine {
    current: ScreenId,
    score: u32,
}

impl Default for ScreenStateMachine {
    fn default() -> Self {
        Self {
            current: ScreenId::Splash,
            score: 0,
        }
    }
}

impl ScreenStateMachine {
    /// Start at the splash screen with a zero score
    pub fn new() -> Self {
        Self::default()
    }

    /// Where `event` leads from `current`, or None if it does not apply there
    pub fn next_screen(current: ScreenId, event: FlowEvent) -> Option<ScreenId> {
        use FlowEvent as E;
        use ScreenId as S;

        match (current, event) {
            (S::Splash, E::SplashElapsed) => Some(S::LoginOrRegister),
            (S::LoginOrRegister, E::ChooseLogin) => Some(S::Login),
            (S::LoginOrRegister, E::ChooseRegister) => Some(S::Register),
            (S::Login, E::LoginAccepted) => Some(S::GameRules),
            (S::Register, E::RegistrationAccepted) => Some(S::LoginOrRegister),
            (S::GameRules, E::StartQuiz) => Some(S::Quiz),
            (S::Quiz, E::QuizFinished { .. }) => Some(S::Result),
            (S::Result, E::PlayAgain) => Some(S::GameRules),
            _ => None,
        }
    }

    /// Apply an event
    ///
    /// Returns the new screen if the event moved the flow. An event that does
    /// not belong to the current screen leaves everything untouched.
    pub fn apply(&mut self, event: FlowEvent) -> Option<ScreenId> {
        let Some(next) = Self::next_screen(self.current, event) else {
            debug!(current = ?self.current, ?event, "flow event rejected");
            return None;
        };

        if let FlowEvent::QuizFinished { score } = event {
            self.score = score;
        }

        info!(from = ?self.current, to = ?next, "screen transition");
        self.current = next;
        Some(next)
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Score reported by the most recent quiz run
    pub fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EVENTS: [FlowEvent; 8] = [
        FlowEvent::SplashElapsed,
        FlowEvent::ChooseLogin,
        FlowEvent::ChooseRegister,
        FlowEvent::LoginAccepted,
        FlowEvent::RegistrationAccepted,
        FlowEvent::StartQuiz,
        FlowEvent::QuizFinished { score: 7 },
        FlowEvent::PlayAgain,
    ];

    fn at(screen: ScreenId) -> ScreenStateMachine {
        ScreenStateMachine {
            current: screen,
            score: 0,
        }
    }

    #[test]
    fn test_starts_at_splash_with_zero_score() {
        let flow = ScreenStateMachine::new();
        assert_eq!(flow.current(), ScreenId::Splash);
        assert_eq!(flow.score(), 0);
    }

    #[test]
    fn test_transition_table() {
        let cases = [
            (ScreenId::Splash, FlowEvent::SplashElapsed, ScreenId::LoginOrRegister),
            (ScreenId::LoginOrRegister, FlowEvent::ChooseLogin, ScreenId::Login),
            (ScreenId::LoginOrRegister, FlowEvent::ChooseRegister, ScreenId::Register),
            (ScreenId::Login, FlowEvent::LoginAccepted, ScreenId::GameRules),
            (ScreenId::Register, FlowEvent::RegistrationAccepted, ScreenId::LoginOrRegister),
            (ScreenId::GameRules, FlowEvent::StartQuiz, ScreenId::Quiz),
            (ScreenId::Quiz, FlowEvent::QuizFinished { score: 0 }, ScreenId::Result),
            (ScreenId::Result, FlowEvent::PlayAgain, ScreenId::GameRules),
        ];
        for (from, event, to) in cases {
            let mut flow = at(from);
            assert_eq!(flow.apply(event), Some(to), "{:?} + {:?}", from, event);
            assert_eq!(flow.current(), to);
        }
    }

    #[test]
    fn test_each_screen_accepts_only_its_own_events() {
        for screen in ScreenId::ALL {
            let accepted = ALL_EVENTS
                .iter()
                .filter(|event| ScreenStateMachine::next_screen(screen, **event).is_some())
                .count();
            let expected = if screen == ScreenId::LoginOrRegister { 2 } else { 1 };
            assert_eq!(accepted, expected, "{:?}", screen);
        }
    }

    #[test]
    fn test_rejected_event_changes_nothing() {
        let mut flow = at(ScreenId::Login);
        assert_eq!(flow.apply(FlowEvent::QuizFinished { score: 9 }), None);
        assert_eq!(flow.current(), ScreenId::Login);
        assert_eq!(flow.score(), 0);
    }

    #[test]
    fn test_quiz_finish_records_score() {
        let mut flow = at(ScreenId::Quiz);
        flow.apply(FlowEvent::QuizFinished { score: 3 });
        assert_eq!(flow.score(), 3);

        // Play again keeps the score for display until the next finish
        flow.apply(FlowEvent::PlayAgain);
        assert_eq!(flow.current(), ScreenId::GameRules);
        assert_eq!(flow.score(), 3);
    }

    #[test]
    fn test_cycle_has_no_terminal_state() {
        let mut flow = at(ScreenId::GameRules);
        for _ in 0..3 {
            assert!(flow.apply(FlowEvent::StartQuiz).is_some());
            assert!(flow.apply(FlowEvent::QuizFinished { score: 0 }).is_some());
            assert!(flow.apply(FlowEvent::PlayAgain).is_some());
        }
        assert_eq!(flow.current(), ScreenId::GameRules);
    }
}
