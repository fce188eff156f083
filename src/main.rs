//! Terminal Pong runner (default binary).
//!
//! Two players share one keyboard: W/S drive the left paddle, the arrow keys
//! drive the right one. R resets the match and Esc quits.

use anyhow::Result;
use tracing::warn;

use tui_pong::effects::{Effects, NoopEffects, SoundEffects};
use tui_pong::engine::{GameConfig, GameLoop};
use tui_pong::input::TerminalInput;
use tui_pong::logging;
use tui_pong::term::{FlushMode, TerminalRenderer};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let _log_guard = logging::init(config.log_path.as_deref())?;

    let effects = select_effects(&config);

    let mode = if config.diff_render {
        FlushMode::Diff
    } else {
        FlushMode::Full
    };
    let mut term = TerminalRenderer::new().with_mode(mode);
    term.enter()?;

    let mut game = GameLoop::new(config, TerminalInput::new(), effects, term);
    let result = game.run();

    // Always try to restore terminal state.
    let _ = game.renderer_mut().exit();
    result?;

    println!("Thanks for playing Pong!");
    Ok(())
}

fn select_effects(config: &GameConfig) -> Box<dyn Effects> {
    if !config.sound.enabled {
        return Box::new(NoopEffects);
    }
    match SoundEffects::start(config.sound.clone()) {
        Ok(sound) => Box::new(sound),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "sound unavailable, continuing silently");
            Box::new(NoopEffects)
        }
    }
}
