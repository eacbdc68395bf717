use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::{DEFAULT_LEVEL, LevelError, ParseOptions, PuzzleEngine, parse_level_with};

#[derive(Parser, Debug)]
#[command(about = "Push every box onto a goal.")]
pub struct SokobanArgs {
    #[command(subcommand)]
    pub mode: Option<SokobanMode>,

    /// Level file to load instead of the built-in level
    #[arg(long, global = true)]
    pub level: Option<PathBuf>,

    /// Pad short level rows with floor instead of rejecting the level
    #[arg(long, global = true)]
    pub pad_ragged_rows: bool,

    /// Where logs go while the terminal is in play mode
    #[arg(long, global = true, default_value = "sokoban_mini.log")]
    pub log_file: PathBuf,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SokobanMode {
    /// Play interactively in the terminal
    Play,
    /// Print the board and its JSON snapshot, then exit
    Show,
}

impl SokobanArgs {
    pub fn mode(&self) -> SokobanMode {
        self.mode.unwrap_or(SokobanMode::Play)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            pad_ragged_rows: self.pad_ragged_rows,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read level file {path}")]
    ReadLevel {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not open log file {path}")]
    OpenLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid level")]
    Level(#[from] LevelError),
}

pub fn load_engine(args: &SokobanArgs) -> Result<PuzzleEngine, ConfigError> {
    let options = args.parse_options();
    match &args.level {
        Some(path) => {
            info!(path = %path.display(), "loading level file");
            let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadLevel {
                path: path.clone(),
                source,
            })?;
            let (game, shared) = parse_level_with(&text, options)?;
            Ok(PuzzleEngine::from_parts(game, shared))
        }
        None => Ok(PuzzleEngine::from_rows(DEFAULT_LEVEL, options)?),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Send logs to a file; the terminal belongs to the game while playing.
pub fn init_file_logging(path: &Path) -> Result<(), ConfigError> {
    let file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(|source| ConfigError::OpenLog {
            path: path.to_path_buf(),
            source,
        })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
