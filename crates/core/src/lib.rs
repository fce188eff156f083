//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation: paddles, ball, scoring and the
//! transient highlight timers. It has **zero dependencies** on UI, terminal or
//! audio I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical serves
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run headless, under a bench harness, or in a terminal
//!
//! # Module Structure
//!
//! - [`paddle`]: Vertical paddle with clamped movement and inclusive hit span
//! - [`ball`]: Continuous ball physics, bounces and serve reset
//! - [`game_state`]: Per-tick sequencing of physics, collisions, scoring and timers
//! - [`rng`]: Seedable LCG for serve angles
//! - [`snapshot`]: Copyable read-only view handed to the renderer
//!
//! # Rules
//!
//! - A paddle bounce reverses the ball and multiplies both velocity components by 1.05
//! - A wall bounce only flips the vertical component
//! - Leaving through the left edge scores for the right player and vice versa;
//!   the next serve starts at the center heading toward the scorer
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{GameEvent, GameState};
//! use tui_pong_types::{GameAction, Playfield};
//!
//! let mut game = GameState::new(Playfield::default(), 12345);
//!
//! game.apply_action(GameAction::LeftUp);
//! assert_eq!(game.left_paddle().row(), 9);
//!
//! let events = game.step();
//! assert!(!events.iter().any(|e| matches!(e, GameEvent::Scored { .. })));
//! assert_eq!(game.ball().previous_position(), (40.0, 12.0));
//! ```

pub mod ball;
pub mod game_state;
pub mod paddle;
pub mod rng;
pub mod snapshot;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use ball::Ball;
pub use game_state::{GameEvent, GameState, TickEvents};
pub use paddle::Paddle;
pub use rng::SimpleRng;
pub use snapshot::{BallSnapshot, GameSnapshot, TimersSnapshot};
