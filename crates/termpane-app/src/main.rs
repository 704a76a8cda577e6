// ABOUTME: Main application entry point.
// ABOUTME: Loads config, binds the pane tree to the terminal and runs the refresh loop.

mod build;
mod widgets;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use termpane_core::Config;
use termpane_layout::{Surface, SurfaceInfo};
use termpane_terminal::{AnsiWriter, CrosstermSize, CursorWriter, SizeQuery};

#[derive(Debug, Parser)]
#[command(name = "termpane", version, about = "Split the terminal into panes and keep them drawn")]
struct Args {
    /// Config file (defaults to ~/.config/termpane/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the refresh interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::load_or_default(),
    };
    if let Some(ms) = args.interval_ms {
        config.refresh_interval_ms = ms;
    }
    Ok(config)
}

/// Puts the terminal back the way it was found when dropped
struct ScreenGuard {
    alternate_screen: bool,
    hide_cursor: bool,
}

impl ScreenGuard {
    fn enter(config: &Config) -> Result<Self> {
        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.hide_cursor {
            execute!(stdout, Hide)?;
        }
        Ok(Self {
            alternate_screen: config.alternate_screen,
            hide_cursor: config.hide_cursor,
        })
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        restore_screen(self.alternate_screen, self.hide_cursor);
    }
}

fn restore_screen(alternate_screen: bool, hide_cursor: bool) {
    let mut stdout = io::stdout();
    if hide_cursor {
        let _ = execute!(stdout, Show);
    }
    if alternate_screen {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn install_panic_hook(config: &Config) {
    let (alternate_screen, hide_cursor) = (config.alternate_screen, config.hide_cursor);
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_screen(alternate_screen, hide_cursor);
        original_hook(panic_info);
    }));
}

fn surface_info() -> SurfaceInfo {
    SurfaceInfo::new("termpane", env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_AUTHORS"))
}

/// Tick the surface at `interval` until Ctrl-C
async fn run<W, S>(surface: &mut Surface<W, S>, interval: Duration) -> Result<()>
where
    W: CursorWriter,
    S: SizeQuery,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = &mut shutdown => {
                result.context("Failed to listen for Ctrl-C")?;
                tracing::info!("Interrupted, exiting");
                return Ok(());
            }
            _ = ticker.tick() => {
                if let Err(e) = surface.tick() {
                    tracing::warn!("Failed to write to terminal: {}", e);
                }
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout is the pane surface, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    tracing::info!("Starting termpane, refresh every {}ms", config.refresh_interval_ms);

    let mut surface = Surface::new(surface_info(), AnsiWriter::stdout(), CrosstermSize);
    build::build_pane(surface.root_mut(), &config.layout);

    install_panic_hook(&config);
    let _guard = ScreenGuard::enter(&config)?;

    let interval = Duration::from_millis(config.refresh_interval_ms.max(1));
    run(&mut surface, interval).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use termpane_terminal::{FixedSize, ScreenBuffer};

    #[test]
    fn cli_overrides_interval() {
        let args = Args::parse_from(["termpane", "--interval-ms", "250"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.refresh_interval_ms, 250);
        assert!(!args.print_config);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::parse_from(["termpane", "--config", "/nonexistent/termpane.toml"]);
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn surface_info_comes_from_package() {
        let info = surface_info();
        assert_eq!(info.name, "termpane");
        assert_eq!(info.author, "termpane developers");
        assert!(!info.description.is_empty());
    }

    #[test]
    fn headless_surface_from_default_config() {
        let config = Config::default();
        let mut surface = Surface::new(SurfaceInfo::default(), ScreenBuffer::new(60, 10), FixedSize::new(60, 10));
        build::build_pane(surface.root_mut(), &config.layout);

        assert!(surface.tick().unwrap());
        assert!(!surface.tick().unwrap());
        let screen = surface.writer();
        assert_eq!(screen.clear_count(), 1);
        assert!(screen.row_text(0).starts_with('┌'));
        assert!(screen.row_text(9).starts_with('└'));
    }
}
