use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures outside the simulation: terminal, logging and setup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),
}
