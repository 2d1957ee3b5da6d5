//! Tiles: grid positions, symbol identities, and flip state.
//!
//! A tile's logical `TileState` changes the moment a rule fires. The
//! `FlipAnimation` that follows is purely visual, but the rules still refuse
//! clicks on a tile while it is turning over.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Grid coordinate, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a `size x size` board.
    #[must_use]
    pub const fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: u8) -> Self {
        let size = size as usize;
        Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Identity of a tile's hidden symbol: an index into the level palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

impl SymbolId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Logical tile state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting to be confirmed as part of a match.
    Revealed,
    /// Face up for the rest of the level.
    Matched,
}

impl TileState {
    /// Is the symbol side showing (once any animation settles)?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

/// A tile turning over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipAnimation {
    /// Session time the flip started.
    pub started: Duration,
    /// `true` when turning to the symbol side, `false` when turning back.
    pub to_face: bool,
}

impl FlipAnimation {
    /// Fraction of the flip completed at `now`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration, duration: Duration) -> f32 {
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_done(&self, now: Duration, duration: Duration) -> bool {
        now.saturating_sub(self.started) >= duration
    }
}

/// A single grid cell with a hidden symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    pub symbol: SymbolId,
    pub state: TileState,
    pub flip: Option<FlipAnimation>,
}

impl Tile {
    /// New face-down tile.
    #[must_use]
    pub fn new(position: Position, symbol: SymbolId) -> Self {
        Self {
            position,
            symbol,
            state: TileState::Hidden,
            flip: None,
        }
    }

    pub fn start_flip(&mut self, now: Duration, to_face: bool) {
        self.flip = Some(FlipAnimation {
            started: now,
            to_face,
        });
    }

    #[must_use]
    pub fn is_flipping(&self, now: Duration, duration: Duration) -> bool {
        self.flip.is_some_and(|f| !f.is_done(now, duration))
    }

    /// Drop a finished animation. Returns true if one was cleared.
    pub fn settle(&mut self, now: Duration, duration: Duration) -> bool {
        if self.flip.is_some_and(|f| f.is_done(now, duration)) {
            self.flip = None;
            true
        } else {
            false
        }
    }
}
