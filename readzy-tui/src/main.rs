//! Readzy TUI - the landing page in a terminal.
//!
//! Header with nav links and hamburger menu, a scrolling page with the hero
//! carousel, feature cards, stats and the contact form, and toast
//! notifications in the top-right corner.

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use readzy_core::config::ReadzyConfig;
use readzy_tui::app::AppState;
use readzy_tui::{input, ui};

#[derive(Parser)]
#[command(name = "readzy", about = "Readzy landing page in the terminal")]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event poll interval in milliseconds.
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Write logs to this file. Without it nothing is logged.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = match &args.config {
        Some(path) => ReadzyConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ReadzyConfig::default(),
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    let mut app = AppState::new(config, Rect::new(0, 0, size.width, size.height));
    info!(
        loaded_at = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "page loaded"
    );
    app.welcome();

    // Run the main event loop
    let result = run_app(
        &mut terminal,
        &mut app,
        Duration::from_millis(args.tick_ms.max(1)),
    );

    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
) -> Result<()> {
    let mut last = Instant::now();
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Resize(width, height) => app.resize(Rect::new(0, 0, width, height)),
                _ => {}
            }
        }

        // 3. Advance timers by wall-clock time
        let now = Instant::now();
        app.tick(now - last);
        last = now;

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
