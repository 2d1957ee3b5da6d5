//! Lab color scheme.

use iced::Color;

use crate::core::Rgb;

pub const BACKGROUND: Color = Color::from_rgb(20.0 / 255.0, 30.0 / 255.0, 40.0 / 255.0); // #141e28
pub const HEADER: Color = Color::from_rgb(30.0 / 255.0, 40.0 / 255.0, 50.0 / 255.0); // #1e2832
pub const HEADER_RULE: Color = Color::from_rgb(50.0 / 255.0, 150.0 / 255.0, 200.0 / 255.0); // #3296c8

pub const HUD_TEXT: Color = Color::from_rgb(100.0 / 255.0, 200.0 / 255.0, 1.0); // #64c8ff
pub const MESSAGE_TEXT: Color = Color::WHITE;

pub const TILE_BACK: Color = Color::from_rgb(60.0 / 255.0, 80.0 / 255.0, 100.0 / 255.0); // #3c5064
pub const TILE_BACK_BORDER: Color = Color::from_rgb(80.0 / 255.0, 100.0 / 255.0, 120.0 / 255.0);
pub const TILE_BACK_RING: Color = Color::from_rgb(100.0 / 255.0, 150.0 / 255.0, 200.0 / 255.0);
pub const TILE_FACE_RING: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.5);

pub const BUBBLE: Color = Color::from_rgba(100.0 / 255.0, 200.0 / 255.0, 1.0, 0.5);

pub const OVERLAY: Color = Color::from_rgba(20.0 / 255.0, 30.0 / 255.0, 40.0 / 255.0, 200.0 / 255.0);
pub const OVERLAY_TITLE: Color = HUD_TEXT;
pub const OVERLAY_TEXT: Color = Color::WHITE;

/// Convert a palette entry to a drawable color.
#[must_use]
pub fn symbol_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.0, rgb.1, rgb.2)
}
