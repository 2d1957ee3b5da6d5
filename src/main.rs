//! Science Night Memory Lab launcher.

use memory_lab::logging::init_logging;
use memory_lab::{ConfigError, GameConfig, GameState, ScienceLab, ScienceLabBuilder, Settings};
use tracing::{error, info, warn};

/// Build a session from `config`, falling back to the shipped levels if it
/// is rejected.
fn start(config: GameConfig, seed: u64) -> Result<(ScienceLab, GameState), ConfigError> {
    ScienceLabBuilder::new().config(config).build(seed).or_else(|err| {
        warn!(%err, "invalid configuration, using defaults");
        ScienceLabBuilder::new().build(seed)
    })
}

fn main() -> iced::Result {
    let loaded = Settings::load();
    init_logging(loaded.as_ref().ok().and_then(|s| s.log.as_deref()));

    let settings = loaded.unwrap_or_else(|err| {
        error!(%err, "ignoring settings file");
        Settings::default()
    });

    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(seed, "dealing");

    match start(settings.game_config(), seed) {
        Ok((game, state)) => memory_lab::ui::run(game, state),
        Err(err) => {
            error!(%err, "failed to start");
            std::process::exit(1);
        }
    }
}
