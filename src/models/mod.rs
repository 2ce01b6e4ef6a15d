pub mod config;
pub mod quiz;

// Re-export commonly used types at models root for convenience
pub use config::AppConfig;
pub use quiz::{Question, QuestionBank};
