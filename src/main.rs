use std::panic;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use grid_snake::clock::FrameClock;
use grid_snake::config::{
    DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH, GameConfig, GridGeometry,
};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::input::InputHandler;
use grid_snake::logging;
use grid_snake::renderer;
use grid_snake::snake::StepOutcome;
use grid_snake::terminal_runtime::{TerminalSession, restore_terminal};
use log::{LevelFilter, info};

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake in the terminal. Arrows/WASD to steer, Esc or q to quit.")]
struct Cli {
    /// Seed for apple placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Minimum level written to the log file.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level.into())?;

    install_panic_hook();

    run(&cli)
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = GameConfig {
        geometry: GridGeometry::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_CELL_SIZE)?,
        ..GameConfig::default()
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    info!(
        "starting: {}x{} px, cell {} px, seed {:?}",
        config.geometry.width(),
        config.geometry.height(),
        config.geometry.cell_size(),
        cli.seed
    );

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut clock = FrameClock::new();
    let mut resets = 0_u32;

    loop {
        let frame_input = input.poll_frame()?;
        if frame_input.quit {
            break;
        }

        let report = state.advance(frame_input.keys.requested_direction());
        if report.step == StepOutcome::Blocked {
            resets += 1;
            info!("collision #{resets}, speed back to {}", state.speed);
        }

        session.draw(|frame| renderer::render(frame, &state))?;
        clock.tick(state.speed);
    }

    info!(
        "quit after {} frames and {resets} collisions",
        state.frame_count
    );
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
