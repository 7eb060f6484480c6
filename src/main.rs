use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use drop_token::config::AppConfig;
use drop_token::game::GameEngine;
use drop_token::session::{Session, SessionOptions};
use drop_token::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Drop Token from the command line.
#[derive(Parser)]
#[command(name = "drop-token", about = "Two-player Drop Token game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "drop_token.toml")]
    config: PathBuf,

    /// Override the board size
    #[arg(long)]
    size: Option<usize>,

    /// Include the rejection reason in ERROR responses
    #[arg(long)]
    verbose_errors: bool,

    /// Play in the terminal UI instead of the line-based session
    #[arg(long)]
    tui: bool,

    /// Log file used while the terminal UI owns the screen
    #[arg(long, default_value = "drop_token_tui.log")]
    log_file: PathBuf,
}

/// Where tracing output is written.
#[derive(Debug, PartialEq, Eq)]
enum LogDestination {
    /// Line session: stdout carries only protocol output
    Stderr,
    /// Terminal UI: stderr would draw over the frame
    File(PathBuf),
}

impl Cli {
    fn log_destination(&self) -> LogDestination {
        if self.tui {
            LogDestination::File(self.log_file.clone())
        } else {
            LogDestination::Stderr
        }
    }
}

fn init_logging(destination: &LogDestination) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match destination {
        LogDestination::Stderr => builder.with_writer(io::stderr).init(),
        LogDestination::File(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_destination())?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        config.game.size = size;
    }
    if cli.verbose_errors {
        config.output.verbose_errors = true;
    }
    config.validate().context("invalid settings")?;

    if cli.tui {
        run_tui(&config)
    } else {
        run_session(&config)
    }
}

fn run_session(config: &AppConfig) -> Result<()> {
    let engine = GameEngine::new(config.game.size)?;
    let options = SessionOptions {
        verbose_errors: config.output.verbose_errors,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(engine, options)
        .run(stdin.lock(), stdout.lock())
        .context("command session failed")?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(
        config.game.size,
        Duration::from_millis(config.ui.poll_interval_ms),
    )?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even when the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_logs_to_stderr() {
        let cli = Cli::parse_from(["drop-token", "--size", "5"]);
        assert_eq!(cli.log_destination(), LogDestination::Stderr);
    }

    #[test]
    fn test_tui_logs_to_file() {
        let cli = Cli::parse_from(["drop-token", "--tui"]);
        assert_eq!(
            cli.log_destination(),
            LogDestination::File(PathBuf::from("drop_token_tui.log"))
        );

        let cli = Cli::parse_from(["drop-token", "--tui", "--log-file", "play.log"]);
        assert_eq!(
            cli.log_destination(),
            LogDestination::File(PathBuf::from("play.log"))
        );
    }
}
