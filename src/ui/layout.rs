//! Screen geometry: where each tile sits and which tile a click hits.

use iced::{Point, Rectangle, Size};

use crate::core::Position;

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Height of the HUD band at the top.
pub const HEADER_HEIGHT: f32 = 90.0;
/// Top edge of the first tile row.
pub const GRID_TOP: f32 = 120.0;
/// Space between neighbouring tiles.
pub const TILE_GAP: f32 = 6.0;
/// Baseline of the status message.
pub const MESSAGE_Y: f32 = 550.0;

/// Distance between tile origins for a board of `grid_size`.
#[must_use]
pub fn tile_pitch(grid_size: u8) -> f32 {
    match grid_size {
        0..=4 => 90.0,
        5 => 75.0,
        n => (375.0 / f32::from(n)).floor(),
    }
}

/// Placement of a `grid_size x grid_size` board in the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub grid_size: u8,
    pub pitch: f32,
    /// Top-left corner of tile (0, 0).
    pub origin: Point,
}

impl BoardLayout {
    /// Board centred horizontally below the header.
    #[must_use]
    pub fn new(grid_size: u8) -> Self {
        let pitch = tile_pitch(grid_size);
        let margin = ((WINDOW_WIDTH - f32::from(grid_size) * pitch) / 2.0).floor();
        Self {
            grid_size,
            pitch,
            origin: Point::new(margin, GRID_TOP),
        }
    }

    /// Drawn rectangle of a tile (the gap is on its right and bottom).
    #[must_use]
    pub fn tile_rect(&self, pos: Position) -> Rectangle {
        Rectangle::new(
            Point::new(
                self.origin.x + f32::from(pos.col) * self.pitch,
                self.origin.y + f32::from(pos.row) * self.pitch,
            ),
            Size::new(self.pitch - TILE_GAP, self.pitch - TILE_GAP),
        )
    }

    /// Tile slot under `point`. Clicks in the gap count for the tile to
    /// their upper left.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<Position> {
        let dx = point.x - self.origin.x;
        let dy = point.y - self.origin.y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }

        let col = (dx / self.pitch).floor();
        let row = (dy / self.pitch).floor();
        let size = f32::from(self.grid_size);
        if col >= size || row >= size {
            return None;
        }

        Some(Position::new(row as u8, col as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layouts() {
        let small = BoardLayout::new(4);
        assert_eq!(small.pitch, 90.0);
        assert_eq!(small.origin, Point::new(220.0, 120.0));

        let large = BoardLayout::new(5);
        assert_eq!(large.pitch, 75.0);
        assert_eq!(large.origin, Point::new(212.0, 120.0));
    }

    #[test]
    fn test_tile_rect() {
        let layout = BoardLayout::new(4);
        let rect = layout.tile_rect(Position::new(1, 2));

        assert_eq!(rect.x, 220.0 + 180.0);
        assert_eq!(rect.y, 120.0 + 90.0);
        assert_eq!(rect.width, 84.0);
        assert_eq!(rect.height, 84.0);
    }

    #[test]
    fn test_hit_test_every_tile_centre() {
        for size in [4u8, 5] {
            let layout = BoardLayout::new(size);
            for row in 0..size {
                for col in 0..size {
                    let pos = Position::new(row, col);
                    let centre = layout.tile_rect(pos).center();
                    assert_eq!(layout.hit_test(centre), Some(pos));
                }
            }
        }
    }

    #[test]
    fn test_hit_test_outside_grid() {
        let layout = BoardLayout::new(4);

        // Header band
        assert_eq!(layout.hit_test(Point::new(400.0, 40.0)), None);
        // Left margin
        assert_eq!(layout.hit_test(Point::new(100.0, 200.0)), None);
        // Right of the last column
        assert_eq!(layout.hit_test(Point::new(580.5, 200.0)), None);
        // Below the last row
        assert_eq!(layout.hit_test(Point::new(300.0, 480.5)), None);
    }

    #[test]
    fn test_hit_test_gap_belongs_to_tile() {
        let layout = BoardLayout::new(4);
        // Inside the 6px gap right of tile (0, 0)
        assert_eq!(layout.hit_test(Point::new(307.0, 130.0)), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_larger_grids_fit() {
        let layout = BoardLayout::new(6);
        let last = layout.tile_rect(Position::new(5, 5));
        assert!(last.x + last.width <= WINDOW_WIDTH);
        assert!(last.y + last.height <= MESSAGE_Y);
    }
}
