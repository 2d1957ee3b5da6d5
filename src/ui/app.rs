//! The iced application: ticks the rules, routes clicks, draws the canvas.

use std::time::{Duration, Instant};

use iced::widget::canvas;
use iced::{Element, Length, Size, Subscription, Task, Theme};
use tracing::{debug, info};

use super::board_canvas::BoardCanvas;
use super::bubbles::Bubbles;
use super::layout::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::core::{Action, FlipOutcome, GameState, Phase, Position};
use crate::games::science_lab::ScienceLab;
use crate::rules::{GameEvent, RulesEngine};

pub const WINDOW_TITLE: &str = "Science Night Memory Lab";

/// Roughly 60 frames per second.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    TileClicked(Position),
}

/// Application state.
pub struct MemoryLab {
    game: ScienceLab,
    state: GameState,
    bubbles: Bubbles,
    started: Instant,
    /// Session clock as of the last tick.
    now: Duration,
    /// Set when the last pair of the last level is found.
    clock_stopped: Option<Duration>,
}

impl MemoryLab {
    pub fn new(game: ScienceLab, state: GameState) -> Self {
        let bubbles = Bubbles::new(state.rng.for_context("bubbles"), WINDOW_WIDTH, WINDOW_HEIGHT);
        Self {
            game,
            state,
            bubbles,
            started: Instant::now(),
            now: Duration::ZERO,
            clock_stopped: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Clock shown in the HUD.
    pub fn elapsed(&self) -> Duration {
        self.clock_stopped.unwrap_or(self.now)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(instant) => self.tick(instant.saturating_duration_since(self.started)),
            Message::TileClicked(pos) => self.click(pos),
        }
    }

    /// Advance the session clock to `now` and run expired timers.
    pub fn tick(&mut self, now: Duration) {
        self.now = now.max(self.now);
        self.bubbles.step();

        for event in self.game.advance(&mut self.state, self.now) {
            match event {
                GameEvent::TilesHidden { .. } => {}
                GameEvent::LevelStarted { level } => {
                    info!(level, elapsed = ?self.elapsed(), "next experiment");
                }
                GameEvent::GameFinished { .. } => {
                    if let Some(result) = self.game.is_terminal(&self.state) {
                        info!(
                            score = result.score,
                            attempts = result.attempts,
                            elapsed = ?self.elapsed(),
                            "game finished"
                        );
                    }
                }
            }
        }
    }

    /// Flip the tile at `pos`; refused flips are ignored.
    pub fn click(&mut self, pos: Position) {
        match self.game.apply_action(&mut self.state, &Action::Flip(pos), self.now) {
            Ok(FlipOutcome::Matched { level_cleared: true }) => {
                if matches!(self.state.public.phase, Phase::Transition { final_level: true, .. }) {
                    self.clock_stopped = Some(self.now);
                }
            }
            Ok(_) => {}
            Err(err) => debug!(%err, "click ignored"),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        canvas(BoardCanvas {
            game: &self.game,
            state: &self.state,
            bubbles: &self.bubbles,
            now: self.now,
            elapsed: self.elapsed(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(FRAME).map(Message::Tick)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Open the window and run until it is closed.
pub fn run(game: ScienceLab, state: GameState) -> iced::Result {
    iced::application(WINDOW_TITLE, MemoryLab::update, MemoryLab::view)
        .subscription(MemoryLab::subscription)
        .theme(MemoryLab::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .resizable(false)
        .antialiasing(true)
        .run_with(move || (MemoryLab::new(game, state), Task::none()))
}
