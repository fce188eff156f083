//! Non-blocking key sources.
//!
//! The game loop only ever asks "is a key pending?" and "give me one key".
//! Neither call may block: a read error or an empty queue both mean "no input
//! this tick".

use std::collections::VecDeque;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Upper bound on keys consumed per tick.
pub const MAX_KEYS_PER_TICK: usize = 16;

pub trait InputSource {
    /// Whether a key can be read right now without waiting.
    fn key_pending(&mut self) -> bool;

    /// Read one key, or `None` if nothing usable is available.
    fn read_key(&mut self) -> Option<KeyEvent>;

    /// Drain pending keys (bounded) and map them to actions.
    ///
    /// Stops right after a `Quit` so nothing queued behind it is applied.
    fn poll_actions(&mut self) -> ArrayVec<GameAction, MAX_KEYS_PER_TICK> {
        let mut actions = ArrayVec::new();
        let mut budget = MAX_KEYS_PER_TICK;
        while budget > 0 && self.key_pending() {
            budget -= 1;
            let Some(key) = self.read_key() else {
                continue;
            };
            if let Some(action) = handle_key_event(key) {
                actions.push(action);
                if action == GameAction::Quit {
                    break;
                }
            }
        }
        actions
    }
}

/// Keyboard source backed by crossterm's event queue.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn key_pending(&mut self) -> bool {
        event::poll(Duration::ZERO).unwrap_or(false)
    }

    fn read_key(&mut self) -> Option<KeyEvent> {
        match event::read() {
            // Release events would double-apply a move on terminals that report them.
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => Some(key),
            _ => None,
        }
    }
}

/// Pre-recorded key queue, for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: codes.into_iter().map(KeyEvent::from).collect(),
        }
    }

    pub fn push(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }

    pub fn push_code(&mut self, code: KeyCode) {
        self.push(KeyEvent::from(code));
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn key_pending(&mut self) -> bool {
        !self.keys.is_empty()
    }

    fn read_key(&mut self) -> Option<KeyEvent> {
        self.keys.pop_front()
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn key_pending(&mut self) -> bool {
        (**self).key_pending()
    }

    fn read_key(&mut self) -> Option<KeyEvent> {
        (**self).read_key()
    }
}
