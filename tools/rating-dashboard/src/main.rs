//! Rating Dashboard: employee performance ratings in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Connect to the default backend (http://localhost:7060)
//! rating-dashboard
//!
//! # Another backend, printing a one-off report instead of the TUI
//! rating-dashboard --api-url http://hr.internal:7060 --snapshot
//!
//! # Explore the UI with sample data
//! rating-dashboard --demo
//! ```

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use rating_dashboard::api::{
    load_all, spawn_all, DemoApi, FetchEvent, HttpPerformanceApi, PerformanceApi,
};
use rating_dashboard::config::{Args, DashboardConfig, RunMode};
use rating_dashboard::domain::{App, Command};
use rating_dashboard::logging::{self, LogTarget};
use rating_dashboard::{report, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = DashboardConfig::from_args(Args::parse())?;

    let api: Arc<dyn PerformanceApi> = if config.demo {
        Arc::new(DemoApi::new())
    } else {
        Arc::new(HttpPerformanceApi::with_timeouts(
            config.api_url.as_str(),
            config.timeout,
            config.connect_timeout,
        )?)
    };
    let source = if config.demo {
        "demo data".to_string()
    } else {
        config.api_url.clone()
    };

    match config.mode {
        RunMode::Snapshot => {
            logging::init(&config.log_level, LogTarget::Stderr)?;
            info!(%source, "taking snapshot");
            run_snapshot(api.as_ref(), source).await;
            Ok(())
        }
        RunMode::Interactive => {
            logging::init(&config.log_level, LogTarget::File(&config.log_file))?;
            info!(%source, "starting dashboard");
            run_interactive(api, source).await
        }
    }
}

/// Fetch everything once and print the report.
async fn run_snapshot(api: &dyn PerformanceApi, source: String) {
    let mut app = App::new(source);
    app.begin_refresh();
    for event in load_all(api).await {
        app.apply(event);
    }
    print!("{}", report::build_report(&app));
}

async fn run_interactive(api: Arc<dyn PerformanceApi>, source: String) -> Result<()> {
    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);
    let (tx, rx) = mpsc::channel(16);

    // Initial load: five independent requests
    app.begin_refresh();
    spawn_all(api.clone(), tx.clone());

    let result = run_app(&mut terminal, &mut app, api, tx, rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {:?}", err);
    }
    info!("dashboard closed");

    result
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: Arc<dyn PerformanceApi>,
    tx: mpsc::Sender<FetchEvent>,
    mut rx: mpsc::Receiver<FetchEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Apply whatever fetches completed since the last frame
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }

        // Handle input with timeout so fetch results show up promptly
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    if let Some(Command::Refresh) = app.handle_key(key.code) {
                        if !app.is_loading() {
                            info!("reloading all resources");
                            app.begin_refresh();
                            spawn_all(api.clone(), tx.clone());
                        }
                    }
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
