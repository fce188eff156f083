//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to a terminal
//! backend in one write.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every draw call bounds-checked so rendering never aborts a tick
//! - Pay for a color switch once per run of same-colored cells, not per cell

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, CONTROLS_TEXT};
pub use renderer::{encode_diff_into, encode_full_into, FlushMode, FlushStats, TerminalRenderer};
