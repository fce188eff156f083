//! Game loop orchestration.
//!
//! Ties the simulation (`core`), key sources (`input`), the framebuffer
//! renderer (`term`) and the cue sink (`effects`) into one fixed-tick loop.

pub mod config;
pub mod game_loop;

pub use tui_pong_core as core;
pub use tui_pong_effects as effects;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

pub use config::GameConfig;
pub use game_loop::{effects_for, GameLoop, LoopState};
