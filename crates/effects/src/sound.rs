//! Audio cues mixed in-process through the default output device.
//!
//! `SoundEffects` owns the rodio output stream and a small tokio runtime.
//! `trigger` pushes onto an unbounded channel and returns; the dispatcher
//! task gives every cue its own detached sink, so overlapping cues mix
//! instead of queueing behind each other.

use anyhow::{Context, Result};
use rodio::{OutputStream, OutputStreamHandle, PlayError, Sink};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::bus::Effects;
use crate::tones::tones_for;
use crate::types::EffectKind;

const ENV_DISABLED: &str = "PONG_SOUND_DISABLED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundConfig {
    pub enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SoundConfig {
    /// `PONG_SOUND_DISABLED` set to any of `1`, `true`, `yes`, `on` turns
    /// sound off.
    pub fn from_env() -> Self {
        let enabled = !std::env::var(ENV_DISABLED)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self { enabled }
    }
}

pub(crate) fn parse_flag(v: &str) -> bool {
    matches!(
        v.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn play(handle: &OutputStreamHandle, kind: EffectKind) -> Result<(), PlayError> {
    let sink = Sink::try_new(handle)?;
    for tone in tones_for(kind) {
        sink.append(tone.source());
    }
    sink.detach();
    Ok(())
}

async fn dispatch(mut rx: mpsc::UnboundedReceiver<EffectKind>, handle: OutputStreamHandle) {
    while let Some(kind) = rx.recv().await {
        if let Err(err) = play(&handle, kind) {
            tracing::debug!(effect = kind.as_str(), error = %err, "sound cue dropped");
        }
    }
}

/// Effects sink backed by the default audio output device.
pub struct SoundEffects {
    runtime: Option<Runtime>,
    tx: mpsc::UnboundedSender<EffectKind>,
    // Dropping the stream silences every detached sink.
    _stream: OutputStream,
}

impl SoundEffects {
    /// Open the output device and spin up the dispatcher.
    ///
    /// Fails when sound is disabled or no output device is available;
    /// callers are expected to fall back to a silent sink.
    pub fn start(config: SoundConfig) -> Result<Self> {
        if !config.enabled {
            anyhow::bail!("sound disabled by {}", ENV_DISABLED);
        }

        let (stream, handle) =
            OutputStream::try_default().context("no audio output device available")?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("pong-sfx")
            .enable_all()
            .build()
            .context("failed to start sound runtime")?;

        let (tx, rx) = mpsc::unbounded_channel();
        runtime.spawn(dispatch(rx, handle));

        tracing::info!("sound effects enabled");

        Ok(Self {
            runtime: Some(runtime),
            tx,
            _stream: stream,
        })
    }
}

impl Effects for SoundEffects {
    fn trigger(&self, kind: EffectKind) {
        let _ = self.tx.send(kind);
    }
}

impl Drop for SoundEffects {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl std::fmt::Debug for SoundEffects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundEffects")
            .field("running", &self.runtime.is_some())
            .finish()
    }
}
