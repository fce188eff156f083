//! The effects seam the game loop talks to.

use std::sync::{Arc, Mutex};

use crate::types::EffectKind;

/// Fire-and-forget effect sink.
///
/// `trigger` must return immediately and never report failure; a missed cue
/// is always preferable to a stalled tick.
pub trait Effects {
    fn trigger(&self, kind: EffectKind);
}

impl<T: Effects + ?Sized> Effects for &T {
    fn trigger(&self, kind: EffectKind) {
        (**self).trigger(kind)
    }
}

impl<T: Effects + ?Sized> Effects for Box<T> {
    fn trigger(&self, kind: EffectKind) {
        (**self).trigger(kind)
    }
}

/// Silent sink for headless runs and platforms without audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEffects;

impl Effects for NoopEffects {
    fn trigger(&self, _kind: EffectKind) {}
}

/// Sink that remembers every cue. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingEffects {
    log: Arc<Mutex<Vec<EffectKind>>>,
}

impl RecordingEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything triggered so far, in order.
    pub fn recorded(&self) -> Vec<EffectKind> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Drain the log.
    pub fn take(&self) -> Vec<EffectKind> {
        self.log
            .lock()
            .map(|mut l| std::mem::take(&mut *l))
            .unwrap_or_default()
    }

    pub fn count(&self, kind: EffectKind) -> usize {
        self.recorded().iter().filter(|k| **k == kind).count()
    }
}

impl Effects for RecordingEffects {
    fn trigger(&self, kind: EffectKind) {
        if let Ok(mut log) = self.log.lock() {
            log.push(kind);
        }
    }
}
