//! Desktop window.
//!
//! - `layout`: tile geometry and click hit-testing
//! - `bubbles`: background decoration
//! - `theme`: colors
//! - `board_canvas`: the iced canvas program
//! - `app`: the iced application loop

pub mod layout;
pub mod bubbles;
pub mod theme;
pub mod board_canvas;
pub mod app;

pub use app::{run, MemoryLab, Message, WINDOW_TITLE};
pub use layout::BoardLayout;
