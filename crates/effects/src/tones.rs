//! Tone table and synthesis.
//!
//! Each effect is a short sequence of sine beeps, optionally separated by
//! silence. Beeps are built as rodio sources and mixed in-process.

use std::time::Duration;

use rodio::source::{Amplify, Delay, SineWave, Source, TakeDuration};

use crate::types::EffectKind;

/// Output gain applied to every beep.
pub const VOLUME: f32 = 0.3;

/// One beep, optionally preceded by silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub pause_before_ms: u32,
}

pub type ToneSource = Delay<Amplify<TakeDuration<SineWave>>>;

impl Tone {
    const fn beep(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            pause_before_ms: 0,
        }
    }

    const fn after(self, pause_before_ms: u32) -> Self {
        Self {
            pause_before_ms,
            ..self
        }
    }

    /// Silence (if any) followed by the sine beep.
    pub fn source(&self) -> ToneSource {
        SineWave::new(self.frequency_hz as f32)
            .take_duration(Duration::from_millis(self.duration_ms as u64))
            .amplify(VOLUME)
            .delay(Duration::from_millis(self.pause_before_ms as u64))
    }
}

const PADDLE_HIT: [Tone; 1] = [Tone::beep(800, 100)];
const WALL_HIT: [Tone; 1] = [Tone::beep(600, 150)];
const SCORE: [Tone; 1] = [Tone::beep(1000, 300)];
const GAME_START: [Tone; 1] = [Tone::beep(440, 200)];
const SCORE_SEQUENCE: [Tone; 3] = [
    Tone::beep(800, 150),
    Tone::beep(1000, 150).after(50),
    Tone::beep(1200, 200).after(50),
];

/// Beeps that make up `kind`, in play order.
pub fn tones_for(kind: EffectKind) -> &'static [Tone] {
    match kind {
        EffectKind::PaddleHit => &PADDLE_HIT,
        EffectKind::WallHit => &WALL_HIT,
        EffectKind::Score => &SCORE,
        EffectKind::ScoreSequence => &SCORE_SEQUENCE,
        EffectKind::GameStart => &GAME_START,
    }
}
