use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use drop_four::config::AppConfig;
use drop_four::logging;
use drop_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "play", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "drop-four.toml")]
    config: PathBuf,

    /// Write logs to this file (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config_found = cli.config.exists();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Held until exit so the background writer flushes
    let _log_guard = logging::init_logging(&config.logging, cli.log_file.as_deref())
        .context("initializing logging")?;
    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    info!(?config, "starting");

    run(App::new(config.ui)).context("running terminal UI")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
