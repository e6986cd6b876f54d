mod api;
mod app;
mod cli;
mod config;
mod domain;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Initialize application state
    let mut app = App::new();

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        // Run in headless mode
        return event::run_headless(&mut app, args.json).await;
    }

    // Load the country cache from the backend
    if let Err(e) = app.initialize().await {
        eprintln!("Error contacting backend: {e}");
        eprintln!("Will continue with an empty dashboard");
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
