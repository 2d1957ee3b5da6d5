//! Core game types: tiles, board, state, actions, RNG, configuration.
//!
//! Nothing in here knows about windows or pixels; the session clock is a
//! `Duration` passed in by the caller.

pub mod rng;
pub mod tile;
pub mod config;
pub mod board;
pub mod action;
pub mod state;

pub use rng::GameRng;
pub use tile::{FlipAnimation, Position, SymbolId, Tile, TileState};
pub use config::{GameConfig, LevelConfig, Rgb, Timing, LEVEL1_PALETTE, LEVEL2_PALETTE};
pub use board::Board;
pub use action::{Action, ActionRecord, FlipOutcome};
pub use state::{GameState, Phase, PublicState};
