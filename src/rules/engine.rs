//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What flips are legal
//! - How a flip modifies state
//! - What the timers do when they expire
//! - When the session is over

use std::time::Duration;

use crate::core::action::{Action, FlipOutcome};
use crate::core::config::GameConfig;
use crate::core::state::GameState;
use crate::core::tile::Position;
use crate::error::FlipError;

/// Result of a completed session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub score: u32,
    pub levels_cleared: u8,
    /// Pairs attempted, matched or not.
    pub attempts: u32,
}

impl GameResult {
    /// Share of attempts that found a pair, in `[0, 1]`.
    #[must_use]
    pub fn accuracy(&self, pairs: u32) -> f32 {
        if self.attempts == 0 {
            return 0.0;
        }
        (pairs as f32 / self.attempts as f32).min(1.0)
    }
}

/// Something a timer did on its own, reported by `RulesEngine::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A mismatched pair turned back face down.
    TilesHidden { first: Position, second: Position },
    /// A new level was dealt.
    LevelStarted { level: u8 },
    /// The last level's transition finished.
    GameFinished { score: u32 },
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: on `Err` the state must be untouched
/// - `advance`: idempotent for a given `now`
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Positions a flip would currently be accepted on.
    fn legal_flips(&self, state: &GameState, now: Duration) -> Vec<Position>;

    /// Apply a player action at session time `now`.
    fn apply_action(
        &self,
        state: &mut GameState,
        action: &Action,
        now: Duration,
    ) -> Result<FlipOutcome, FlipError>;

    /// Run expired timers.
    fn advance(&self, state: &mut GameState, now: Duration) -> Vec<GameEvent>;

    /// Check if the session is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate all legal actions.
    fn legal_actions(&self, state: &GameState, now: Duration) -> Vec<Action> {
        self.legal_flips(state, now)
            .into_iter()
            .map(Action::Flip)
            .collect()
    }
}
