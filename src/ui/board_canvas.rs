//! Board canvas: draws the lab and turns left clicks into tile positions.
//!
//! Everything is redrawn each frame. Tiles animate continuously while
//! flipping and the bubbles never stop, so a geometry cache would be
//! invalidated every tick anyway.

use std::f32::consts::PI;
use std::time::Duration;

use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, event, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme};

use super::app::Message;
use super::bubbles::Bubbles;
use super::layout::{BoardLayout, HEADER_HEIGHT, MESSAGE_Y, WINDOW_WIDTH};
use super::theme;
use crate::core::{GameState, Phase, Tile};
use crate::games::science_lab::ScienceLab;
use crate::rules::RulesEngine;

/// Text sizes.
mod font {
    pub const HUD: f32 = 26.0;
    pub const MESSAGE: f32 = 24.0;
    pub const OVERLAY_TITLE: f32 = 36.0;
    pub const OVERLAY_TEXT: f32 = 24.0;
}

const TILE_RADIUS: f32 = 10.0;

/// Ring radii on a face-up tile.
const FACE_RINGS: [f32; 2] = [10.0, 20.0];
/// Ring radii on a tile back. Radius 0 is drawn as a centre dot.
const BACK_RINGS: [f32; 3] = [0.0, 10.0, 20.0];

/// How a tile looks at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileAppearance {
    /// Horizontal squash, 1.0 when flat on the board.
    pub scale: f32,
    /// Whether the symbol side is showing.
    pub face: bool,
}

/// Squash a turning tile by `|cos(progress * pi)|`. The side it is leaving
/// shows until the midpoint, the side it is turning to after.
#[must_use]
pub fn tile_appearance(tile: &Tile, now: Duration, flip_duration: Duration) -> TileAppearance {
    match tile.flip {
        Some(flip) if !flip.is_done(now, flip_duration) => {
            let progress = flip.progress(now, flip_duration);
            TileAppearance {
                scale: (progress * PI).cos().abs(),
                face: if progress < 0.5 { !flip.to_face } else { flip.to_face },
            }
        }
        _ => TileAppearance {
            scale: 1.0,
            face: tile.state.is_face_up(),
        },
    }
}

/// The three HUD readouts.
#[must_use]
pub fn hud_lines(elapsed: Duration, level: u8, score: u32) -> [String; 3] {
    [
        format!("TIME: {:.1}s", elapsed.as_secs_f32()),
        format!("LEVEL: {level}"),
        format!("SCORE: {score}"),
    ]
}

/// Title and subtitle of the between-levels screen, if one is showing.
#[must_use]
pub fn overlay_text(phase: Phase, level: u8, score: u32, elapsed: Duration) -> Option<(String, String)> {
    match phase {
        Phase::Transition { final_level: false, .. } => Some((
            format!("EXPERIMENT {level} COMPLETE!"),
            format!(
                "Preparing Level {}... More complex molecules ahead!",
                level.saturating_add(1)
            ),
        )),
        Phase::Transition { final_level: true, .. } | Phase::Complete => Some((
            "CONGRATULATIONS! ALL EXPERIMENTS COMPLETE!".to_string(),
            format!(
                "Final Score: {score} - Time: {:.1}s",
                elapsed.as_secs_f32()
            ),
        )),
        Phase::Playing | Phase::ShowingMismatch { .. } => None,
    }
}

/// Borrowed view of everything the canvas draws.
pub struct BoardCanvas<'a> {
    pub game: &'a ScienceLab,
    pub state: &'a GameState,
    pub bubbles: &'a Bubbles,
    /// Session clock, for animations.
    pub now: Duration,
    /// Clock shown in the HUD (stops when the last pair is found).
    pub elapsed: Duration,
}

impl<'a> BoardCanvas<'a> {
    fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.state.board.size())
    }

    fn draw_background(&self, frame: &mut Frame, bounds: Rectangle) {
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::BACKGROUND);

        for bubble in self.bubbles.iter() {
            let circle = Path::circle(Point::new(bubble.x, bubble.y), bubble.radius);
            frame.stroke(&circle, Stroke::default().with_color(theme::BUBBLE).with_width(1.0));
        }
    }

    fn draw_hud(&self, frame: &mut Frame) {
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(WINDOW_WIDTH, HEADER_HEIGHT),
            theme::HEADER,
        );
        let rule = Path::line(
            Point::new(0.0, HEADER_HEIGHT),
            Point::new(WINDOW_WIDTH, HEADER_HEIGHT),
        );
        frame.stroke(&rule, Stroke::default().with_color(theme::HEADER_RULE).with_width(2.0));

        let public = &self.state.public;
        for (i, line) in hud_lines(self.elapsed, public.level_number, public.score)
            .into_iter()
            .enumerate()
        {
            frame.fill_text(Text {
                content: line,
                position: Point::new(20.0 + i as f32 * 270.0, 30.0),
                color: theme::HUD_TEXT,
                size: Pixels(font::HUD),
                ..Text::default()
            });
        }

        frame.fill_text(Text {
            content: public.message.clone(),
            position: Point::new(WINDOW_WIDTH / 2.0, MESSAGE_Y),
            color: theme::MESSAGE_TEXT,
            size: Pixels(font::MESSAGE),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Top,
            ..Text::default()
        });
    }

    fn draw_tile(&self, frame: &mut Frame, layout: &BoardLayout, tile: &Tile) {
        let rect = layout.tile_rect(tile.position);
        let look = tile_appearance(tile, self.now, self.game.config().timing.flip());

        let width = rect.width * look.scale;
        let top_left = Point::new(rect.x + (rect.width - width) / 2.0, rect.y);
        let size = Size::new(width, rect.height);
        let centre = rect.center();
        let radius = TILE_RADIUS.min(width / 2.0);
        let body = Path::rounded_rectangle(top_left, size, radius.into());
        let flat = look.scale >= 1.0;

        if look.face {
            let color = self
                .game
                .symbol_color(self.state, tile.symbol)
                .map_or(theme::TILE_BACK, theme::symbol_color);
            frame.fill(&body, color);
            if look.scale > 0.1 {
                ring(frame, centre, &FACE_RINGS, look.scale, theme::TILE_FACE_RING);
            }
        } else {
            frame.fill(&body, theme::TILE_BACK);
            if flat {
                frame.stroke(
                    &body,
                    Stroke::default().with_color(theme::TILE_BACK_BORDER).with_width(2.0),
                );
            }
            if look.scale > 0.1 {
                ring(frame, centre, &BACK_RINGS, look.scale, theme::TILE_BACK_RING);
            }
        }
    }

    fn draw_overlay(&self, frame: &mut Frame, bounds: Rectangle) {
        let public = &self.state.public;
        let Some((title, subtitle)) =
            overlay_text(public.phase, public.level_number, public.score, self.elapsed)
        else {
            return;
        };

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::OVERLAY);
        frame.fill_text(Text {
            content: title,
            position: Point::new(WINDOW_WIDTH / 2.0, 250.0),
            color: theme::OVERLAY_TITLE,
            size: Pixels(font::OVERLAY_TITLE),
            horizontal_alignment: Horizontal::Center,
            ..Text::default()
        });
        frame.fill_text(Text {
            content: subtitle,
            position: Point::new(WINDOW_WIDTH / 2.0, 320.0),
            color: theme::OVERLAY_TEXT,
            size: Pixels(font::OVERLAY_TEXT),
            horizontal_alignment: Horizontal::Center,
            ..Text::default()
        });
    }
}

/// Concentric outlines, shrunk horizontally along with the tile.
fn ring(frame: &mut Frame, centre: Point, radii: &[f32], scale: f32, color: Color) {
    for &radius in radii {
        if radius == 0.0 {
            frame.fill(&Path::circle(centre, 1.0), color);
            continue;
        }
        let circle = Path::circle(centre, radius * scale);
        frame.stroke(&circle, Stroke::default().with_color(color).with_width(1.0));
    }
}

impl<'a> canvas::Program<Message> for BoardCanvas<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let hit = cursor
                    .position_in(bounds)
                    .and_then(|point| self.layout().hit_test(point));
                match hit {
                    Some(pos) => (event::Status::Captured, Some(Message::TileClicked(pos))),
                    None => (event::Status::Ignored, None),
                }
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        self.draw_background(&mut frame, bounds);
        self.draw_hud(&mut frame);

        let layout = self.layout();
        for tile in self.state.board.tiles() {
            self.draw_tile(&mut frame, &layout, tile);
        }

        self.draw_overlay(&mut frame, bounds);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let clickable = cursor
            .position_in(bounds)
            .and_then(|point| self.layout().hit_test(point))
            .is_some_and(|pos| self.game.check_flip(self.state, pos, self.now).is_ok());

        if clickable {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
