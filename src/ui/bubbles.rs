//! Decorative bubbles drifting up behind the board.

use crate::core::GameRng;

/// A single bubble outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Pixels risen per frame.
    pub speed: f32,
}

/// The bubble field.
#[derive(Clone, Debug)]
pub struct Bubbles {
    bubbles: Vec<Bubble>,
    rng: GameRng,
    width: f32,
    height: f32,
}

impl Bubbles {
    pub const COUNT: usize = 15;

    /// Bubbles respawn once they rise past this line.
    const TOP_EXIT: f32 = -20.0;

    /// Scatter `COUNT` bubbles over a `width x height` area.
    #[must_use]
    pub fn new(mut rng: GameRng, width: f32, height: f32) -> Self {
        let bubbles = (0..Self::COUNT)
            .map(|_| Bubble {
                x: rng.gen_range_f32(0.0..width),
                y: rng.gen_range_f32(0.0..height),
                radius: rng.gen_range_f32(5.0..15.0),
                speed: rng.gen_range_f32(0.5..2.0),
            })
            .collect();

        Self {
            bubbles,
            rng,
            width,
            height,
        }
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        for bubble in &mut self.bubbles {
            bubble.y -= bubble.speed;
            if bubble.y < Self::TOP_EXIT {
                bubble.y = self.height - Self::TOP_EXIT;
                bubble.x = self.rng.gen_range_f32(0.0..self.width);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }
}
