//! Science lab rules implementation.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::core::{
    Action, Board, FlipOutcome, GameConfig, GameRng, GameState, LevelConfig, Phase, Position,
    PublicState, Rgb, SymbolId, TileState, Timing,
};
use crate::error::{ConfigError, FlipError};
use crate::rules::{GameEvent, GameResult, RulesEngine};

/// Status line before the first click.
pub const WELCOME_MESSAGE: &str = "Little Scientists: Match Adventure Quest!";

/// The memory-matching rules.
#[derive(Clone, Debug)]
pub struct ScienceLab {
    config: GameConfig,
}

/// Builder for creating a ScienceLab session.
pub struct ScienceLabBuilder {
    config: GameConfig,
}

impl Default for ScienceLabBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::standard(),
        }
    }
}

impl ScienceLabBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.config.timing = timing;
        self
    }

    /// Validate the configuration and deal the first level.
    pub fn build(self, seed: u64) -> Result<(ScienceLab, GameState), ConfigError> {
        self.config.validate()?;

        let first = self.config.levels.first().ok_or(ConfigError::NoLevels)?;
        let rng = GameRng::new(seed);
        let board = deal_level(first, &rng)?;
        let public = PublicState::new(first.number, WELCOME_MESSAGE);

        info!(seed, level = first.number, size = first.grid_size, "session started");

        Ok((ScienceLab { config: self.config }, GameState::new(public, board, rng)))
    }
}

/// Each level draws from its own RNG stream so the deal never depends on
/// how many cheers were picked before it.
fn deal_level(level: &LevelConfig, rng: &GameRng) -> Result<Board, ConfigError> {
    let mut deal_rng = rng.for_context(&format!("deal-{}", level.number));
    Board::deal(level, &mut deal_rng)
}

impl ScienceLab {
    /// Configuration of the level being played.
    #[must_use]
    pub fn current_level(&self, state: &GameState) -> Option<&LevelConfig> {
        self.config.level(state.public.level_index)
    }

    /// Number of levels in the session.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.config.levels.len()
    }

    /// Color for a symbol on the current level.
    #[must_use]
    pub fn symbol_color(&self, state: &GameState, symbol: SymbolId) -> Option<Rgb> {
        self.current_level(state)
            .and_then(|level| level.palette.get(symbol.index()).copied())
    }

    /// Why a flip at `pos` would be refused, if it would be.
    pub fn check_flip(&self, state: &GameState, pos: Position, now: Duration) -> Result<(), FlipError> {
        match state.public.phase {
            Phase::Complete => return Err(FlipError::GameComplete),
            phase if !phase.accepts_input() => return Err(FlipError::InputLocked),
            _ => {}
        }

        if !state.board.contains(pos) {
            return Err(FlipError::OutOfBounds(pos));
        }
        let tile = state.board.tile(pos).ok_or(FlipError::EmptyCell(pos))?;

        match tile.state {
            TileState::Matched => Err(FlipError::AlreadyMatched(pos)),
            TileState::Revealed => Err(FlipError::AlreadyFaceUp(pos)),
            TileState::Hidden if tile.is_flipping(now, self.config.timing.flip()) => {
                Err(FlipError::StillFlipping(pos))
            }
            TileState::Hidden => Ok(()),
        }
    }

    fn resolve_match(
        &self,
        state: &mut GameState,
        first: Position,
        second: Position,
        now: Duration,
    ) -> FlipOutcome {
        for pos in [first, second] {
            if let Some(tile) = state.board.tile_mut(pos) {
                tile.state = TileState::Matched;
            }
        }

        let Some(level) = self.current_level(state) else {
            return FlipOutcome::Matched { level_cleared: false };
        };

        state.public.matches_found += 1;
        state.public.score += level.points_per_match;
        if let Some(cheer) = state.rng.choose(&level.cheers) {
            state.public.message.clone_from(cheer);
        }

        let level_cleared = state.board.all_matched();
        if level_cleared {
            let final_level = state.public.level_index + 1 >= self.config.levels.len();
            state.public.phase = Phase::Transition {
                until: now + self.config.timing.transition(),
                final_level,
            };
            info!(
                level = level.number,
                score = state.public.score,
                final_level,
                "level cleared"
            );
        }

        FlipOutcome::Matched { level_cleared }
    }

    fn start_next_level(&self, state: &mut GameState) -> Result<u8, ConfigError> {
        let next_index = state.public.level_index + 1;
        let next = self.config.level(next_index).ok_or(ConfigError::NoLevels)?;
        let board = deal_level(next, &state.rng)?;
        let previous_flips = state.public.flips_this_level();

        state.board = board;
        state.selected = None;
        state.public.level_index = next_index;
        state.public.level_number = next.number;
        state.public.matches_found = 0;
        state.public.phase = Phase::Playing;
        state.public.message = format!(
            "Starting Level {}! More complex molecules ahead!",
            next.number
        );

        info!(
            level = next.number,
            size = next.grid_size,
            previous_flips,
            "level started"
        );
        Ok(next.number)
    }

    fn finish(&self, state: &mut GameState, events: &mut Vec<GameEvent>) {
        state.public.phase = Phase::Complete;
        info!(
            score = state.public.score,
            attempts = state.public.attempts,
            flips = state.public.history.len(),
            "all experiments complete"
        );
        events.push(GameEvent::GameFinished {
            score: state.public.score,
        });
    }
}

impl RulesEngine for ScienceLab {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_flips(&self, state: &GameState, now: Duration) -> Vec<Position> {
        state
            .board
            .tiles()
            .map(|tile| tile.position)
            .filter(|&pos| self.check_flip(state, pos, now).is_ok())
            .collect()
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        action: &Action,
        now: Duration,
    ) -> Result<FlipOutcome, FlipError> {
        let pos = action.position();
        self.check_flip(state, pos, now)?;

        let tile = state.board.tile_mut(pos).ok_or(FlipError::EmptyCell(pos))?;
        tile.state = TileState::Revealed;
        tile.start_flip(now, true);
        let symbol = tile.symbol;

        let outcome = match state.selected.take() {
            None => {
                state.selected = Some(pos);
                FlipOutcome::FirstRevealed
            }
            Some(first) => {
                state.public.attempts += 1;
                let first_symbol = state.board.tile(first).map(|t| t.symbol);
                if first_symbol == Some(symbol) {
                    self.resolve_match(state, first, pos, now)
                } else {
                    state.public.phase = Phase::ShowingMismatch {
                        first,
                        second: pos,
                        until: now + self.config.timing.mismatch(),
                    };
                    FlipOutcome::Mismatched
                }
            }
        };

        debug!(%pos, ?outcome, score = state.public.score, "flip");
        state.public.record(now, *action, outcome);
        Ok(outcome)
    }

    fn advance(&self, state: &mut GameState, now: Duration) -> Vec<GameEvent> {
        let flip = self.config.timing.flip();
        for tile in state.board.tiles_mut() {
            tile.settle(now, flip);
        }

        let mut events = Vec::new();
        match state.public.phase {
            Phase::ShowingMismatch { first, second, until } if now >= until => {
                for pos in [first, second] {
                    if let Some(tile) = state.board.tile_mut(pos) {
                        if tile.state == TileState::Revealed {
                            tile.state = TileState::Hidden;
                            tile.start_flip(now, false);
                        }
                    }
                }
                state.public.phase = Phase::Playing;
                debug!(%first, %second, "mismatch hidden");
                events.push(GameEvent::TilesHidden { first, second });
            }
            Phase::Transition { until, final_level } if now >= until => {
                if final_level {
                    self.finish(state, &mut events);
                } else {
                    match self.start_next_level(state) {
                        Ok(level) => events.push(GameEvent::LevelStarted { level }),
                        Err(err) => {
                            error!(%err, "failed to deal next level");
                            self.finish(state, &mut events);
                        }
                    }
                }
            }
            _ => {}
        }

        events
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.is_complete().then(|| GameResult {
            score: state.public.score,
            levels_cleared: state.public.level_number,
            attempts: state.public.attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LEVEL1_PALETTE;

    const T0: Duration = Duration::ZERO;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Positions of both tiles for every symbol, in symbol order.
    fn pairs(state: &GameState) -> Vec<(Position, Position)> {
        let mut by_symbol: Vec<Vec<Position>> = vec![Vec::new(); state.board.pair_count()];
        for tile in state.board.tiles() {
            by_symbol[tile.symbol.index()].push(tile.position);
        }
        by_symbol.into_iter().map(|p| (p[0], p[1])).collect()
    }

    fn flip(game: &ScienceLab, state: &mut GameState, pos: Position, now: Duration) -> FlipOutcome {
        game.apply_action(state, &Action::Flip(pos), now).unwrap()
    }

    #[test]
    fn test_build_standard() {
        let (game, state) = ScienceLabBuilder::new().build(42).unwrap();

        assert_eq!(game.level_count(), 2);
        assert_eq!(state.public.level_number, 1);
        assert_eq!(state.public.message, WELCOME_MESSAGE);
        assert_eq!(state.board.size(), 4);
        assert_eq!(game.legal_flips(&state, T0).len(), 16);
        assert!(game.is_terminal(&state).is_none());
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = GameConfig {
            levels: vec![LevelConfig::new(1, 4, &LEVEL1_PALETTE[..2]).with_cheers(["ok"])],
            timing: Timing::default(),
        };
        let result = ScienceLabBuilder::new().config(config).build(1);
        assert!(matches!(result, Err(ConfigError::PaletteTooSmall { .. })));
    }

    #[test]
    fn test_first_flip_selects() {
        let (game, mut state) = ScienceLabBuilder::new().build(42).unwrap();
        let pos = Position::new(0, 0);

        assert_eq!(flip(&game, &mut state, pos, T0), FlipOutcome::FirstRevealed);
        assert_eq!(state.selected, Some(pos));
        assert_eq!(state.board.tile(pos).unwrap().state, TileState::Revealed);
        assert_eq!(state.public.attempts, 0);
        assert_eq!(state.public.history.len(), 1);
    }

    #[test]
    fn test_match_scores_and_cheers() {
        let (game, mut state) = ScienceLabBuilder::new().build(42).unwrap();
        let (a, b) = pairs(&state)[0];

        flip(&game, &mut state, a, T0);
        let outcome = flip(&game, &mut state, b, ms(100));

        assert_eq!(outcome, FlipOutcome::Matched { level_cleared: false });
        assert_eq!(state.public.score, 10);
        assert_eq!(state.public.matches_found, 1);
        assert_eq!(state.public.attempts, 1);
        assert!(state.selected.is_none());
        assert_eq!(state.board.tile(a).unwrap().state, TileState::Matched);
        assert_eq!(state.board.tile(b).unwrap().state, TileState::Matched);

        let cheers = &game.config().levels[0].cheers;
        assert!(cheers.contains(&state.public.message));
    }

    #[test]
    fn test_second_tile_may_flip_while_first_turns() {
        let (game, mut state) = ScienceLabBuilder::new().build(42).unwrap();
        let (a, b) = pairs(&state)[2];

        flip(&game, &mut state, a, T0);
        // First tile still mid-animation
        assert!(state.board.tile(a).unwrap().is_flipping(ms(10), ms(300)));
        assert!(game.apply_action(&mut state, &Action::Flip(b), ms(10)).is_ok());
    }

    #[test]
    fn test_mismatch_locks_then_hides() {
        let (game, mut state) = ScienceLabBuilder::new().build(42).unwrap();
        let all = pairs(&state);
        let (a, _) = all[0];
        let (c, _) = all[1];

        flip(&game, &mut state, a, T0);
        assert_eq!(flip(&game, &mut state, c, ms(400)), FlipOutcome::Mismatched);
        assert_eq!(state.face_up_unconfirmed().len(), 2);

        // Locked while feedback shows
        let (other, _) = all[2];
        assert_eq!(
            game.apply_action(&mut state, &Action::Flip(other), ms(800)),
            Err(FlipError::InputLocked)
        );
        assert!(game.legal_flips(&state, ms(800)).is_empty());

        assert!(game.advance(&mut state, ms(1300)).is_empty());
        assert_eq!(state.face_up_unconfirmed().len(), 2);

        let events = game.advance(&mut state, ms(1400));
        assert_eq!(events, vec![GameEvent::TilesHidden { first: a, second: c }]);
        assert_eq!(state.public.phase, Phase::Playing);
        assert!(state.face_up_unconfirmed().is_empty());

        // Turning back: not clickable until the animation is done
        assert_eq!(
            game.apply_action(&mut state, &Action::Flip(a), ms(1500)),
            Err(FlipError::StillFlipping(a))
        );
        game.advance(&mut state, ms(1700));
        assert!(state.board.tile(a).unwrap().flip.is_none());
        assert!(game.apply_action(&mut state, &Action::Flip(a), ms(1700)).is_ok());
    }

    #[test]
    fn test_rejected_flips() {
        let (game, mut state) = ScienceLabBuilder::new().build(42).unwrap();
        let (a, b) = pairs(&state)[0];

        assert_eq!(
            game.apply_action(&mut state, &Action::Flip(Position::new(4, 0)), T0),
            Err(FlipError::OutOfBounds(Position::new(4, 0)))
        );

        flip(&game, &mut state, a, T0);
        assert_eq!(
            game.apply_action(&mut state, &Action::Flip(a), ms(500)),
            Err(FlipError::AlreadyFaceUp(a))
        );

        flip(&game, &mut state, b, ms(500));
        assert_eq!(
            game.apply_action(&mut state, &Action::Flip(b), ms(900)),
            Err(FlipError::AlreadyMatched(b))
        );
    }

    #[test]
    fn test_level_transition_and_completion() {
        let timing = Timing {
            flip_ms: 0,
            mismatch_ms: 0,
            transition_ms: 2000,
        };
        let (game, mut state) = ScienceLabBuilder::new().timing(timing).build(7).unwrap();

        for (a, b) in pairs(&state) {
            flip(&game, &mut state, a, T0);
            flip(&game, &mut state, b, T0);
        }
        assert_eq!(state.public.score, 80);
        assert_eq!(
            state.public.phase,
            Phase::Transition {
                until: ms(2000),
                final_level: false
            }
        );

        assert!(game.advance(&mut state, ms(1999)).is_empty());
        assert_eq!(
            game.advance(&mut state, ms(2000)),
            vec![GameEvent::LevelStarted { level: 2 }]
        );
        assert_eq!(state.public.level_number, 2);
        assert_eq!(state.public.matches_found, 0);
        assert_eq!(state.board.size(), 5);
        assert_eq!(
            state.public.message,
            "Starting Level 2! More complex molecules ahead!"
        );

        let now = ms(3000);
        for (a, b) in pairs(&state) {
            flip(&game, &mut state, a, now);
            flip(&game, &mut state, b, now);
        }
        assert_eq!(state.public.score, 80 + 12 * 20);

        let events = game.advance(&mut state, ms(5000));
        assert_eq!(events, vec![GameEvent::GameFinished { score: 320 }]);

        let result = game.is_terminal(&state).unwrap();
        assert_eq!(result.score, 320);
        assert_eq!(result.levels_cleared, 2);
        assert_eq!(result.attempts, 20);

        assert_eq!(
            game.apply_action(&mut state, &Action::Flip(Position::new(0, 0)), ms(6000)),
            Err(FlipError::GameComplete)
        );
        assert!(game.advance(&mut state, ms(9000)).is_empty());
    }

    #[test]
    fn test_empty_centre_cell_rejected() {
        let config = GameConfig {
            levels: vec![GameConfig::standard().levels[1].clone()],
            timing: Timing::default(),
        };
        let (game, mut state) = ScienceLabBuilder::new().config(config).build(3).unwrap();
        let centre = Position::new(2, 2);

        assert_eq!(
            game.apply_action(&mut state, &Action::Flip(centre), T0),
            Err(FlipError::EmptyCell(centre))
        );
        assert!(!game.legal_flips(&state, T0).contains(&centre));
    }

    /// Level 1 with symbol `i % 8` at row-major index `i`.
    fn scripted(game_timing: Timing) -> (ScienceLab, GameState) {
        let (game, mut state) = ScienceLabBuilder::new().timing(game_timing).build(1).unwrap();
        let layout: Vec<Option<u8>> = (0..16u8).map(|i| Some(i % 8)).collect();
        state.board = Board::from_layout(4, &layout).unwrap();
        (game, state)
    }

    #[test]
    fn test_scripted_mismatch_then_match() {
        let (game, mut state) = scripted(Timing::default());
        let p = Position::new;

        assert_eq!(flip(&game, &mut state, p(0, 0), T0), FlipOutcome::FirstRevealed);
        assert_eq!(flip(&game, &mut state, p(0, 1), T0), FlipOutcome::Mismatched);
        assert_eq!(state.public.score, 0);

        game.advance(&mut state, ms(1000));
        game.advance(&mut state, ms(1300));
        assert_eq!(state.board.tile(p(0, 0)).unwrap().state, TileState::Hidden);

        assert_eq!(flip(&game, &mut state, p(0, 0), ms(1300)), FlipOutcome::FirstRevealed);
        assert_eq!(
            flip(&game, &mut state, p(2, 0), ms(1400)),
            FlipOutcome::Matched { level_cleared: false }
        );
        assert_eq!(state.public.score, 10);
        assert_eq!(state.public.attempts, 2);
        assert_eq!(state.public.flips_this_level(), 4);
    }

    #[test]
    fn test_legal_actions_follow_legal_flips() {
        let (game, mut state) = scripted(Timing::default());
        assert_eq!(game.legal_actions(&state, T0).len(), 16);

        flip(&game, &mut state, Position::new(0, 0), T0);
        let actions = game.legal_actions(&state, T0);
        assert_eq!(actions.len(), 15);
        assert!(!actions.contains(&Action::Flip(Position::new(0, 0))));
        assert!(actions
            .iter()
            .all(|a| game.check_flip(&state, a.position(), T0).is_ok()));

        flip(&game, &mut state, Position::new(0, 1), T0);
        assert!(game.legal_actions(&state, T0).is_empty());
    }

    #[test]
    fn test_symbol_color() {
        let (game, state) = ScienceLabBuilder::new().build(42).unwrap();
        assert_eq!(game.symbol_color(&state, SymbolId(0)), Some(LEVEL1_PALETTE[0]));
        assert_eq!(game.symbol_color(&state, SymbolId(40)), None);
    }
}
