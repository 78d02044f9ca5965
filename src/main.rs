//! `Pomotask` - terminal pomodoro timer with a persistent to-do list
//!
//! Entry point for the application.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use pomotask::app::{App, AppEvent, FAREWELL, Runtime};
use pomotask::cli::Args;
use pomotask::fs::JsonFileStore;
use pomotask::logging::init_logging;
use pomotask::tui::TerminalEventGuard;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(args.log_file.as_deref(), &args.log_level)?;
    info!(file = %args.file.display(), "starting");

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    let result = run_app(&mut terminal, args);

    // Restore the terminal
    ratatui::restore();

    if result.is_ok() {
        println!("{FAREWELL}");
    }
    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, args: Args) -> Result<()> {
    // Must come after ratatui::init, which resets terminal flags.
    let event_guard = TerminalEventGuard::new();
    debug!(
        bracketed_paste = event_guard.bracketed_paste_enabled(),
        "terminal ready"
    );

    let mut runtime = Runtime::new(Arc::new(JsonFileStore::new(args.file)));
    let mut app = App::new();
    runtime.execute(app.init());

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit() {
            break;
        }

        // Poll for terminal input with a short timeout
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    runtime.dispatch(&mut app, AppEvent::Key(key));
                }
                Event::Paste(text) => {
                    runtime.dispatch(&mut app, AppEvent::Paste(text));
                }
                _ => {}
            }
        }

        // Apply ticks and persistence completions
        while let Some(event) = runtime.try_next_event() {
            runtime.dispatch(&mut app, event);
        }
    }

    info!("exiting");
    Ok(())
}
