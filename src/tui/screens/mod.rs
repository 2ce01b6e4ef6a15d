pub mod game_rules;
pub mod login;
pub mod login_or_register;
pub mod quiz;
pub mod register;
pub mod result;
pub mod splash;

pub use game_rules::GameRulesState;
pub use login::LoginState;
pub use login_or_register::LoginOrRegisterState;
pub use quiz::QuizState;
pub use register::RegisterState;
pub use result::ResultState;
pub use splash::SplashState;
