//! Runtime configuration read from the environment.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::effects::SoundConfig;
use crate::types::{Playfield, TICK_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub playfield: Playfield,
    pub tick: Duration,
    pub seed: u32,
    /// Emit only changed cell runs after the first frame.
    pub diff_render: bool,
    pub sound: SoundConfig,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            tick: Duration::from_millis(TICK_MS),
            seed: 1,
            diff_render: false,
            sound: SoundConfig::default(),
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        use std::env;

        let tick_ms = env::var("PONG_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        let seed = env::var("PONG_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let diff_render = env::var("PONG_DIFF_RENDER")
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        let log_path = env::var("PONG_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            playfield: Playfield::default(),
            tick: Duration::from_millis(tick_ms),
            seed,
            diff_render,
            sound: SoundConfig::from_env(),
            log_path,
        }
    }
}

fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so consecutive launches differ.
    (nanos ^ (nanos >> 32)) as u32
}
