//! TUI Pong (workspace facade crate).
//!
//! Exposes `tui_pong::{core,effects,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub mod logging;

pub use tui_pong_core as core;
pub use tui_pong_effects as effects;
pub use tui_pong_engine as engine;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
