use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four::ai::{HeuristicAgent, HumanPlayer, MoveSource};
use connect_four::config::{AppConfig, GameMode};
use connect_four::game::{Piece, Session};
use connect_four::ui::{App, ConsoleRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Frontend {
    Tui,
    Console,
}

/// Play Connect Four against a rule-based opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four")]
struct Cli {
    /// Front end: full-screen terminal UI or line-based console
    #[arg(long, value_enum, default_value = "tui")]
    frontend: Frontend,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override who controls each side
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Seed the agent's tie-break for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.players.mode = mode;
    }
    if cli.seed.is_some() {
        config.agent.seed = cli.seed;
    }

    match cli.frontend {
        Frontend::Tui => run_tui(&config),
        Frontend::Console => run_console(&config),
    }
}

fn build_source(config: &AppConfig, piece: Piece, agent: bool) -> Box<dyn MoveSource> {
    let name = match piece {
        Piece::Red => config.players.first_name.clone(),
        Piece::Yellow => config.players.second_name.clone(),
    };
    if agent {
        let agent = match config.agent.seed {
            // Offset so two seeded agents do not mirror each other.
            Some(seed) => HeuristicAgent::with_seed(piece, seed.wrapping_add(piece as u64)),
            None => HeuristicAgent::new(piece),
        };
        Box::new(agent.named(name))
    } else {
        Box::new(HumanPlayer::stdin(name, piece))
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let (first_agent, second_agent) = config.players.mode.agent_sides();

    println!("Welcome to Connect Four!");
    println!(
        "{} is '{}' and {} is '{}'.",
        config.players.first_name,
        Piece::Red.symbol(),
        config.players.second_name,
        Piece::Yellow.symbol()
    );
    println!("Enter a column number (0-6) to drop your piece.\n");

    let mut session = Session::new(
        build_source(config, Piece::Red, first_agent),
        build_source(config, Piece::Yellow, second_agent),
    )?;
    let result = session.run(&mut ConsoleRenderer::stdout());
    println!("Thanks for playing!");
    result.context("game aborted")?;
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let Some(mut app) = App::new(config) else {
        bail!("agent-vs-agent games need --frontend console");
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
