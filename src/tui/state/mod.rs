pub mod messages;
pub mod navigation;

pub use messages::ErrorMessage;
pub use navigation::Navigable;
