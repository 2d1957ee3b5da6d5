//! Level and timing configuration.
//!
//! The game ships two fixed levels (`GameConfig::standard`). Timing values
//! can be overridden from the settings file; level layouts cannot.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// An RGB color used as a tile symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Level 1 symbols.
pub const LEVEL1_PALETTE: [Rgb; 8] = [
    Rgb(142, 68, 173),  // purple
    Rgb(41, 128, 185),  // blue
    Rgb(39, 174, 96),   // green
    Rgb(230, 126, 34),  // orange
    Rgb(192, 57, 43),   // red
    Rgb(142, 142, 142), // silver
    Rgb(241, 196, 15),  // yellow
    Rgb(46, 204, 113),  // emerald
];

/// Level 2 symbols. Only the first twelve are dealt on a 5x5 board.
pub const LEVEL2_PALETTE: [Rgb; 13] = [
    Rgb(155, 89, 182),  // purple
    Rgb(52, 152, 219),  // blue
    Rgb(26, 188, 156),  // turquoise
    Rgb(241, 196, 15),  // yellow
    Rgb(230, 126, 34),  // orange
    Rgb(231, 76, 60),   // red
    Rgb(149, 165, 166), // gray
    Rgb(211, 84, 0),    // dark orange
    Rgb(41, 128, 185),  // light blue
    Rgb(22, 160, 133),  // green
    Rgb(192, 57, 43),   // dark red
    Rgb(142, 68, 173),  // dark purple
    Rgb(39, 174, 96),   // light green
];

const LEVEL1_CHEERS: [&str; 5] = [
    "Great observation, scientist!",
    "Those molecules bond perfectly!",
    "Eureka! A perfect pair!",
    "Your lab notes are spot on!",
    "Brilliant deduction!",
];

const LEVEL2_CHEERS: [&str; 5] = [
    "Complex compound identified!",
    "Outstanding lab work!",
    "You split the atom on that one!",
    "A reaction worth writing down!",
    "Nobel prize material!",
];

/// One difficulty level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// 1-based level number shown to the player.
    pub number: u8,

    /// Board is `grid_size x grid_size`.
    pub grid_size: u8,

    /// Symbol colors. The first `pair_count()` entries are dealt.
    pub palette: Vec<Rgb>,

    /// Messages picked at random after each match.
    pub cheers: Vec<String>,

    /// Score awarded per pair.
    pub points_per_match: u32,
}

impl LevelConfig {
    /// Create a level. Points default to `10 * number`.
    pub fn new(number: u8, grid_size: u8, palette: &[Rgb]) -> Self {
        Self {
            number,
            grid_size,
            palette: palette.to_vec(),
            cheers: Vec::new(),
            points_per_match: 10 * u32::from(number),
        }
    }

    #[must_use]
    pub fn with_cheers<I, S>(mut self, cheers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cheers = cheers.into_iter().map(Into::into).collect();
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    /// Number of symbol pairs dealt. Odd boards leave one cell empty.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall {
                level: self.number,
                size: self.grid_size,
            });
        }
        if usize::from(u8::MAX) < self.pair_count() {
            return Err(ConfigError::GridTooLarge {
                level: self.number,
                size: self.grid_size,
            });
        }
        if self.palette.len() < self.pair_count() {
            return Err(ConfigError::PaletteTooSmall {
                level: self.number,
                needed: self.pair_count(),
                available: self.palette.len(),
            });
        }
        let used = &self.palette[..self.pair_count()];
        for (i, color) in used.iter().enumerate() {
            if used[..i].contains(color) {
                return Err(ConfigError::DuplicateSymbol {
                    level: self.number,
                    index: i,
                });
            }
        }
        if self.cheers.is_empty() {
            return Err(ConfigError::NoCheers { level: self.number });
        }
        Ok(())
    }
}

/// Animation and feedback delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// How long a tile takes to turn over.
    pub flip_ms: u64,
    /// How long a mismatched pair stays face up.
    pub mismatch_ms: u64,
    /// How long the level-complete screen is shown.
    pub transition_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            flip_ms: 300,
            mismatch_ms: 1000,
            transition_ms: 2000,
        }
    }
}

impl Timing {
    #[must_use]
    pub fn flip(&self) -> Duration {
        Duration::from_millis(self.flip_ms)
    }

    #[must_use]
    pub fn mismatch(&self) -> Duration {
        Duration::from_millis(self.mismatch_ms)
    }

    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Levels in play order.
    pub levels: Vec<LevelConfig>,

    pub timing: Timing,
}

impl GameConfig {
    /// The two shipped levels: 4x4 then 5x5.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            levels: vec![
                LevelConfig::new(1, 4, &LEVEL1_PALETTE).with_cheers(LEVEL1_CHEERS),
                LevelConfig::new(2, 5, &LEVEL2_PALETTE).with_cheers(LEVEL2_CHEERS),
            ],
            timing: Timing::default(),
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Get a level by 0-based index.
    #[must_use]
    pub fn level(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }

    /// Check every level can be dealt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        self.levels.iter().try_for_each(LevelConfig::validate)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_levels() {
        let config = GameConfig::standard();
        assert!(config.validate().is_ok());
        assert_eq!(config.levels.len(), 2);

        let one = config.level(0).unwrap();
        assert_eq!((one.number, one.grid_size), (1, 4));
        assert_eq!(one.pair_count(), 8);
        assert_eq!(one.points_per_match, 10);

        let two = config.level(1).unwrap();
        assert_eq!((two.number, two.grid_size), (2, 5));
        assert_eq!(two.cell_count(), 25);
        assert_eq!(two.pair_count(), 12);
        assert_eq!(two.points_per_match, 20);

        assert!(config.level(2).is_none());
    }

    #[test]
    fn test_timing_defaults() {
        let timing = Timing::default();
        assert_eq!(timing.flip(), Duration::from_millis(300));
        assert_eq!(timing.mismatch(), Duration::from_secs(1));
        assert_eq!(timing.transition(), Duration::from_secs(2));
    }

    #[test]
    fn test_palette_too_small() {
        let config = GameConfig {
            levels: vec![LevelConfig::new(1, 4, &LEVEL1_PALETTE[..5]).with_cheers(["ok"])],
            timing: Timing::default(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaletteTooSmall { needed: 8, available: 5, .. })
        ));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let mut palette = LEVEL1_PALETTE.to_vec();
        palette[3] = palette[0];
        let config = GameConfig {
            levels: vec![LevelConfig::new(1, 4, &palette).with_cheers(["ok"])],
            timing: Timing::default(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateSymbol { level: 1, index: 3 })
        ));
    }

    #[test]
    fn test_unused_palette_entries_may_repeat() {
        // Only the first twelve level 2 colors are dealt
        let mut palette = LEVEL2_PALETTE.to_vec();
        palette[12] = palette[0];
        let level = LevelConfig::new(2, 5, &palette).with_cheers(["ok"]);
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_invalid_shapes() {
        let empty = GameConfig {
            levels: Vec::new(),
            timing: Timing::default(),
        };
        assert!(matches!(empty.validate(), Err(ConfigError::NoLevels)));

        let tiny = LevelConfig::new(1, 1, &LEVEL1_PALETTE).with_cheers(["ok"]);
        assert!(matches!(tiny.validate(), Err(ConfigError::GridTooSmall { .. })));

        let silent = LevelConfig::new(1, 4, &LEVEL1_PALETTE);
        assert!(matches!(silent.validate(), Err(ConfigError::NoCheers { level: 1 })));
    }

    #[test]
    fn test_timing_partial_toml() {
        let timing: Timing = toml::from_str("flip_ms = 150").unwrap();
        assert_eq!(timing.flip_ms, 150);
        assert_eq!(timing.mismatch_ms, 1000);
        assert_eq!(timing.transition_ms, 2000);
    }
}
