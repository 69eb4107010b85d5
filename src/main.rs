use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use tui_2048::config::AppConfig;
use tui_2048::game::{GameState, Spawner};
use tui_2048::ui::{
    App, KeyInput, KeyMap, LineInput, Palette, PlainRenderer, SessionEnd, TerminalRenderer,
};

/// Play 2048 in the terminal.
#[derive(Parser)]
#[command(name = "tui_2048", about = "Play 2048 in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "2048.toml")]
    config: PathBuf,

    /// Line mode: print the board and read one line per turn from stdin
    #[arg(long)]
    plain: bool,

    /// Disable tile colours
    #[arg(long)]
    no_color: bool,

    /// Seed the tile spawner for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG sets the filter)
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

    init_tracing(cli.log_file.as_deref(), cli.plain)?;

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let divider = config.game.four_chance_divider;
    let spawner = match cli.seed {
        Some(seed) => Spawner::seeded(seed, divider),
        None => Spawner::from_os_rng(divider),
    };
    let palette = if cli.no_color {
        None
    } else {
        config.display.active_palette()
    };
    let keys = config.controls;

    let (end, state) = if cli.plain {
        run_plain(spawner, palette, keys)?
    } else {
        run_fullscreen(spawner, palette, keys)?
    };

    match end {
        SessionEnd::BoardFull => println!("Board full! Final score: {}", state.score()),
        SessionEnd::Quit => println!("Final score: {}", state.score()),
    }
    Ok(())
}

fn init_tracing(log_file: Option<&std::path::Path>, plain: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        // the full-screen view owns the terminal, so only line mode logs to stderr
        None if plain => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
        None => {}
    }
    Ok(())
}

fn run_plain(
    spawner: Spawner,
    palette: Option<Palette>,
    keys: KeyMap,
) -> Result<(SessionEnd, GameState)> {
    let renderer = PlainRenderer::new(io::stdout(), palette);
    let input = LineInput::new(io::stdin().lock(), keys);
    let mut app = App::new(spawner, renderer, input);
    let end = app.run().context("playing in line mode")?;
    Ok((end, *app.state()))
}

fn run_fullscreen(
    spawner: Spawner,
    palette: Option<Palette>,
    keys: KeyMap,
) -> Result<(SessionEnd, GameState)> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let renderer = TerminalRenderer::new(terminal, palette, keys);
    let mut app = App::new(spawner, renderer, KeyInput::new(keys));
    let res = app.run();

    // Restore terminal, even when the loop failed
    let terminal = app.renderer_mut().terminal_mut();
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    let end = res.context("playing in full-screen mode")?;
    Ok((end, *app.state()))
}
