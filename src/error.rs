//! Error types.
//!
//! Rejected clicks are errors at the rules level so they can be logged and
//! tested, but the window treats every `FlipError` as "ignore the click".

use std::path::PathBuf;
use thiserror::Error;

use crate::core::Position;

/// Why a flip was refused. The game state is untouched in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipError {
    #[error("input locked while feedback or a level transition is showing")]
    InputLocked,

    #[error("game already complete")]
    GameComplete,

    #[error("{0} is outside the board")]
    OutOfBounds(Position),

    #[error("{0} is an empty cell")]
    EmptyCell(Position),

    #[error("tile {0} is already matched")]
    AlreadyMatched(Position),

    #[error("tile {0} is already face up")]
    AlreadyFaceUp(Position),

    #[error("tile {0} is still flipping")]
    StillFlipping(Position),
}

/// Invalid level or timing configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no levels configured")]
    NoLevels,

    #[error("level {level}: grid size {size} is too small")]
    GridTooSmall { level: u8, size: u8 },

    #[error("level {level}: grid size {size} has more pairs than symbol ids")]
    GridTooLarge { level: u8, size: u8 },

    #[error("level {level}: needs {needed} symbols, palette has {available}")]
    PaletteTooSmall {
        level: u8,
        needed: usize,
        available: usize,
    },

    #[error("level {level}: palette entry {index} repeats an earlier color")]
    DuplicateSymbol { level: u8, index: usize },

    #[error("level {level}: no cheer messages")]
    NoCheers { level: u8 },
}

/// Settings file problems.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
