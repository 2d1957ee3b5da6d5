//! "Science Night Memory Lab": the shipped memory-matching game.
//!
//! - Tiles start face down; click two to turn them over
//! - A matching pair stays up and scores `10 x level` points
//! - A mismatched pair is shown for a second, then turns back
//! - Clearing the 4x4 lab unlocks the 5x5 lab; clearing that ends the game

mod game;

pub use game::{ScienceLab, ScienceLabBuilder, WELCOME_MESSAGE};
