//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal flips for each game state
//! - How flips modify state
//! - What happens when feedback and transition timers expire
//! - When the session is complete
//!
//! The window calls into `RulesEngine` but never interprets match logic
//! directly.

pub mod engine;

pub use engine::{GameEvent, GameResult, RulesEngine};
