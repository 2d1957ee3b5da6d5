//! The tile grid.
//!
//! Cells are stored row-major. Odd-sized boards cannot be filled with pairs,
//! so their centre cell is left empty and never holds a tile.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::LevelConfig;
use super::rng::GameRng;
use super::tile::{Position, SymbolId, Tile, TileState};
use crate::error::ConfigError;

/// Fixed-size grid of tiles where every symbol appears exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Tile>>,
}

impl Board {
    /// Deal a fresh, shuffled board for `level`.
    pub fn deal(level: &LevelConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        if level.palette.len() < level.pair_count() {
            return Err(ConfigError::PaletteTooSmall {
                level: level.number,
                needed: level.pair_count(),
                available: level.palette.len(),
            });
        }

        let too_large = || ConfigError::GridTooLarge {
            level: level.number,
            size: level.grid_size,
        };
        let mut symbols = Vec::with_capacity(level.pair_count() * 2);
        for i in 0..level.pair_count() {
            let id = u8::try_from(i).map_err(|_| too_large())?;
            symbols.extend([SymbolId(id); 2]);
        }
        rng.shuffle(&mut symbols);

        let size = level.grid_size;
        let empty = Self::empty_cell_for(size);
        let mut symbols = symbols.into_iter();
        let cells = (0..level.cell_count())
            .map(|index| {
                let position = Position::from_index(index, size);
                if Some(position) == empty {
                    None
                } else {
                    symbols.next().map(|symbol| Tile::new(position, symbol))
                }
            })
            .collect();

        Ok(Self { size, cells })
    }

    /// Build a board from an explicit layout, row-major. `None` marks an
    /// empty cell. Used to script known boards.
    ///
    /// Returns `None` if the layout is not square or the pair invariant fails.
    #[must_use]
    pub fn from_layout(size: u8, layout: &[Option<u8>]) -> Option<Self> {
        if layout.len() != size as usize * size as usize {
            return None;
        }
        let cells = layout
            .iter()
            .enumerate()
            .map(|(index, symbol)| {
                symbol.map(|s| Tile::new(Position::from_index(index, size), SymbolId(s)))
            })
            .collect();
        let board = Self { size, cells };
        board.symbol_counts().values().all(|&n| n == 2).then_some(board)
    }

    /// The cell left empty on an odd `size x size` board.
    #[must_use]
    pub fn empty_cell_for(size: u8) -> Option<Position> {
        (size % 2 == 1).then(|| Position::new(size / 2, size / 2))
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// The empty cell, if this board has one.
    #[must_use]
    pub fn empty_cell(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(|index| Position::from_index(index, self.size))
    }

    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[pos.index(self.size)].as_ref()
    }

    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[pos.index(self.size)].as_mut()
    }

    /// All tiles, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.cells.iter_mut().flatten()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles().count() / 2
    }

    /// How many times each symbol occurs.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<SymbolId, usize> {
        let mut counts = FxHashMap::default();
        for tile in self.tiles() {
            *counts.entry(tile.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Face-up tiles that are not yet matched.
    #[must_use]
    pub fn face_up_unconfirmed(&self) -> SmallVec<[Position; 2]> {
        self.tiles()
            .filter(|t| t.state == TileState::Revealed)
            .map(|t| t.position)
            .collect()
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.tiles().all(|t| t.state == TileState::Matched)
    }
}
