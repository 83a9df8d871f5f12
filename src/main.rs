use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use tictactoe::config::{AppConfig, ConfigSource, LoggingConfig, UiMode};
use tictactoe::console::{ConsoleExit, ConsoleGame};
use tictactoe::game::{Marker, Match};
use tictactoe::ui::App;

/// Two-player Tic-Tac-Toe in the terminal.
#[derive(Parser)]
#[command(name = "tictactoe", about = "Two-player Tic-Tac-Toe")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,

    /// Play with typed cell numbers instead of the full-screen UI
    #[arg(long)]
    console: bool,

    /// Name of the player using X
    #[arg(long)]
    player_x: Option<String>,

    /// Name of the player using O
    #[arg(long)]
    player_o: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.player_x {
        config.players.x = name;
    }
    if let Some(name) = cli.player_o {
        config.players.o = name;
    }
    if cli.console {
        config.ui.mode = UiMode::Console;
    }
    if cli.log_file.is_some() {
        config.logging.file = cli.log_file;
    }
    config.validate().context("invalid settings")?;

    init_logging(&config.logging, config.ui.mode)?;
    if let ConfigSource::Defaults { missing } = &source {
        warn!(path = %missing.display(), "config file not found, using defaults");
    }

    let game = Match::new(config.players.x.trim(), config.players.o.trim());
    info!(
        x = %config.players.x,
        o = %config.players.o,
        mode = ?config.ui.mode,
        "starting match"
    );

    match config.ui.mode {
        UiMode::Console => run_console(game),
        UiMode::Tui => run_tui(game),
    }
}

/// Install the tracing subscriber. The TUI owns the screen, so without a log
/// file it gets no subscriber at all.
fn init_logging(logging: &LoggingConfig, mode: UiMode) -> Result<()> {
    let level = logging.level()?;

    match (&logging.file, mode) {
        (Some(path), _) => {
            let file = open_log(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, UiMode::Console) => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .init();
        }
        (None, UiMode::Tui) => {}
    }
    Ok(())
}

fn open_log(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

fn run_console(game: Match) -> Result<()> {
    let stdin = io::stdin();
    let mut console = ConsoleGame::new(game, stdin.lock(), io::stdout());
    let exit = console.run().context("console game")?;
    if exit == ConsoleExit::Cancelled {
        info!("console game cancelled");
    }
    Ok(())
}

fn run_tui(game: Match) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    let game = app.game();
    info!(
        rounds = game.round(),
        x = game.score(Marker::X),
        o = game.score(Marker::O),
        "match finished"
    );
    res.context("terminal UI")
}
