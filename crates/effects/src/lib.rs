//! Non-blocking audio-visual cue dispatch.
//!
//! The game loop only ever sees the [`Effects`] trait. Implementations:
//! - [`SoundEffects`]: synthesized beeps mixed through rodio on a background
//!   runtime
//! - [`NoopEffects`]: silent
//! - [`RecordingEffects`]: remembers every cue, for tests and replays

pub mod bus;
pub mod sound;
pub mod tones;

pub use tui_pong_types as types;

pub use bus::{Effects, NoopEffects, RecordingEffects};
pub use sound::{SoundConfig, SoundEffects};
pub use tones::{tones_for, Tone};
