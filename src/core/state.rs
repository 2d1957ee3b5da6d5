//! Session state.
//!
//! ## PublicState
//!
//! Everything the HUD shows plus bookkeeping the rules need:
//! - Level, score, matches found, attempts
//! - Status message
//! - Phase (what the timers are waiting for)
//! - Flip history
//!
//! ## GameState
//!
//! Public state plus the board, the pending selection and the RNG.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::Duration;

use super::action::{Action, ActionRecord, FlipOutcome};
use super::board::Board;
use super::rng::GameRng;
use super::tile::Position;

/// What the session is doing right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for clicks.
    #[default]
    Playing,
    /// A mismatched pair is face up until `until`.
    ShowingMismatch {
        first: Position,
        second: Position,
        until: Duration,
    },
    /// Level cleared. At `until` the next level starts, or the game ends
    /// when `final_level` is set.
    Transition { until: Duration, final_level: bool },
    /// All levels cleared.
    Complete,
}

impl Phase {
    /// Only `Playing` accepts flips.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        matches!(self, Phase::Playing)
    }
}

/// Observable session state.
///
/// The history uses an `im` persistent vector so snapshots of a long
/// session stay cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// 0-based index into `GameConfig::levels`.
    pub level_index: usize,

    /// 1-based level number shown to the player.
    pub level_number: u8,

    pub score: u32,

    /// Pairs matched on the current level.
    pub matches_found: u32,

    /// Pairs attempted across the session, matched or not.
    pub attempts: u32,

    /// Status line shown under the board.
    pub message: String,

    pub phase: Phase,

    /// Accepted flips across the session.
    pub history: Vector<ActionRecord>,

    sequence: u32,
}

impl PublicState {
    /// State at the start of the first level.
    #[must_use]
    pub fn new(level_number: u8, message: impl Into<String>) -> Self {
        Self {
            level_index: 0,
            level_number,
            score: 0,
            matches_found: 0,
            attempts: 0,
            message: message.into(),
            phase: Phase::Playing,
            history: Vector::new(),
            sequence: 0,
        }
    }

    /// Record an accepted action.
    pub fn record(&mut self, at: Duration, action: Action, outcome: FlipOutcome) {
        let record = ActionRecord {
            level: self.level_number,
            sequence: self.sequence,
            at_ms: u64::try_from(at.as_millis()).unwrap_or(u64::MAX),
            action,
            outcome,
        };
        self.sequence += 1;
        self.history.push_back(record);
    }

    /// Number of accepted flips on the current level.
    #[must_use]
    pub fn flips_this_level(&self) -> usize {
        self.history
            .iter()
            .filter(|r| r.level == self.level_number)
            .count()
    }
}

/// Full session state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub public: PublicState,

    pub board: Board,

    /// First tile of the pair being built.
    pub selected: Option<Position>,

    /// Session RNG; level deals use context streams derived from it.
    pub rng: GameRng,
}

impl GameState {
    #[must_use]
    pub fn new(public: PublicState, board: Board, rng: GameRng) -> Self {
        Self {
            public,
            board,
            selected: None,
            rng,
        }
    }

    /// Tiles face up but not yet matched (never more than two).
    #[must_use]
    pub fn face_up_unconfirmed(&self) -> SmallVec<[Position; 2]> {
        self.board.face_up_unconfirmed()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.public.phase == Phase::Complete
    }
}
