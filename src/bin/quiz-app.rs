use anyhow::Result;
use dotenvy::dotenv;
use quiz_app::logging;
use quiz_app::models::{config, AppConfig};
use quiz_app::tui::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Logging first, so config fallback warnings are recorded
    logging::init(config::log_file_from_env().as_deref())?;
    let cfg = AppConfig::from_env()?;
    tracing::info!(?cfg, "configuration loaded");

    let mut app = App::new(cfg)?;

    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
