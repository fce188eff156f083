//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and exposes the
//! non-blocking [`InputSource`] seam the game loop samples once per tick.

pub mod map;
pub mod source;

pub use tui_pong_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{InputSource, ScriptedInput, TerminalInput, MAX_KEYS_PER_TICK};
