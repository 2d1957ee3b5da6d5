//! Player actions and their recorded outcomes.
//!
//! The only thing a player can do is turn a tile over, so `Action` has a
//! single variant. It stays an enum so the rules engine can enumerate legal
//! actions the same way for any future input (keyboard cursor, hint button).

use serde::{Deserialize, Serialize};

use super::tile::Position;

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Turn the tile at this position face up.
    Flip(Position),
}

impl Action {
    /// The tile this action targets.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Action::Flip(pos) => *pos,
        }
    }
}

/// What an accepted flip led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First tile of a pair is now face up.
    FirstRevealed,
    /// The pair matched. `level_cleared` is set on the last pair.
    Matched { level_cleared: bool },
    /// The pair differs; both tiles turn back after the feedback delay.
    Mismatched,
}

/// An accepted action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Level number the action was taken on.
    pub level: u8,

    /// Sequence number across the whole session.
    pub sequence: u32,

    /// Session time in milliseconds.
    pub at_ms: u64,

    pub action: Action,

    pub outcome: FlipOutcome,
}
