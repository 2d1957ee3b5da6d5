//! # memory-lab
//!
//! "Science Night Memory Lab": a memory-matching game for kids. Tiles flip
//! to reveal colors; find the pairs to score and unlock the next lab.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: Game logic never reads the wall clock. Callers pass a
//!    session `Duration`, so every timer is testable without a window.
//!
//! 2. **Configuration Over Convention**: Levels are `LevelConfig` values.
//!    The shipped game is `GameConfig::standard()` (4x4, then 5x5).
//!
//! 3. **Deterministic**: A seed fixes every deal.
//!
//! ## Modules
//!
//! - `core`: Tiles, board, state, actions, RNG, configuration
//! - `rules`: `RulesEngine` trait
//! - `games`: The science lab rules
//! - `ui`: iced window, canvas and hit-testing
//! - `settings`: Optional TOML settings file
//! - `logging`: tracing subscriber setup

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod ui;
pub mod settings;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, FlipOutcome, GameConfig, GameRng, GameState,
    LevelConfig, Phase, Position, PublicState, Rgb, SymbolId, Tile, TileState, Timing,
};

pub use crate::error::{ConfigError, FlipError, SettingsError};

pub use crate::rules::{GameEvent, GameResult, RulesEngine};

pub use crate::games::science_lab::{ScienceLab, ScienceLabBuilder};

pub use crate::settings::Settings;
