//! Core types module - shared geometry, tuning constants and actions
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping, effects).
//!
//! # Playfield
//!
//! The playfield is a fixed character grid. The outermost ring of cells is
//! reserved for the border; everything inside it is the *interior*:
//!
//! - **Width**: 80 columns (interior columns 1-78)
//! - **Height**: 25 rows (interior rows 1-23)
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed tick interval |
//! | `PADDLE_HEIGHT` | 5 | Paddle glyph span in rows |
//! | `BALL_BASE_SPEED` | 0.5 | Horizontal speed after a serve (cells/tick) |
//! | `BALL_SPEED_INCREASE` | 1.05 | Amplification applied on every paddle bounce |
//! | `PADDLE_FLASH_TICKS` | 3 | Paddle highlight duration after a hit |
//! | `SCORE_FLASH_TICKS` | 10 | Scoring effect duration |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Direction, Playfield, Side};
//!
//! let pf = Playfield::default();
//! assert_eq!((pf.width, pf.height), (80, 25));
//! assert_eq!(pf.top(), 1);
//! assert_eq!(pf.bottom(), 23);
//! assert!(pf.in_interior(1, 1));
//! assert!(!pf.in_interior(0, 12));
//!
//! assert_eq!(Direction::Left.sign(), -1.0);
//! assert_eq!(Direction::toward(Side::Right), Direction::Right);
//! ```

/// Default playfield width in columns (80)
pub const PLAYFIELD_WIDTH: u16 = 80;

/// Default playfield height in rows (25)
pub const PLAYFIELD_HEIGHT: u16 = 25;

/// Fixed tick interval in milliseconds (50ms = 20 ticks per second)
pub const TICK_MS: u64 = 50;

/// Paddle height in rows
pub const PADDLE_HEIGHT: u16 = 5;

/// Distance of each paddle lane from its side edge (left lane = 2, right lane = width - 3)
pub const PADDLE_INSET: u16 = 2;

/// Ball speed right after a serve, in cells per tick
pub const BALL_BASE_SPEED: f64 = 0.5;

/// Multiplicative speed increase applied to both velocity components on a paddle bounce
pub const BALL_SPEED_INCREASE: f64 = 1.05;

/// Ticks a paddle stays highlighted after returning the ball
pub const PADDLE_FLASH_TICKS: u8 = 3;

/// Ticks the scoring burst stays on screen
pub const SCORE_FLASH_TICKS: u8 = 10;

/// Radius (in cells) of the scoring burst
pub const SCORE_FLASH_RADIUS: u16 = 2;

/// Every time a player's score reaches a multiple of this, the score jingle plays
pub const SCORE_MILESTONE: u32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_tuning_defaults() {
        assert_eq!(PLAYFIELD_WIDTH, 80);
        assert_eq!(PLAYFIELD_HEIGHT, 25);
        assert_eq!(TICK_MS, 50);
        assert_eq!(PADDLE_HEIGHT, 5);
        assert_eq!(BALL_BASE_SPEED, 0.5);
        assert_eq!(BALL_SPEED_INCREASE, 1.05);
        assert!(BALL_SPEED_INCREASE > 1.0);
    }

    #[test]
    fn default_playfield_interior_bounds() {
        let pf = Playfield::default();
        assert_eq!(pf.left(), 1);
        assert_eq!(pf.right(), 78);
        assert_eq!(pf.top(), 1);
        assert_eq!(pf.bottom(), 23);
        assert_eq!(pf.center(), (40, 12));
    }

    #[test]
    fn paddle_lanes_and_rows() {
        let pf = Playfield::default();
        assert_eq!(pf.paddle_column(Side::Left), 2);
        assert_eq!(pf.paddle_column(Side::Right), 77);
        assert_eq!(pf.paddle_start_row(), 10);
        assert_eq!(pf.paddle_max_row(), 19);
    }

    #[test]
    fn interior_check_rejects_border_and_outside() {
        let pf = Playfield::new(10, 6);
        assert!(pf.in_interior(1, 1));
        assert!(pf.in_interior(8, 4));
        assert!(!pf.in_interior(0, 1));
        assert!(!pf.in_interior(9, 1));
        assert!(!pf.in_interior(1, 5));
        assert!(!pf.in_interior(-3, 2));
        assert!(!pf.in_interior(4, 100));
    }

    #[test]
    fn clamp_interior_pins_to_bounds() {
        let pf = Playfield::default();
        assert_eq!(pf.clamp_interior(-5, 40), (1, 23));
        assert_eq!(pf.clamp_interior(100, 0), (78, 1));
        assert_eq!(pf.clamp_interior(40, 12), (40, 12));
    }
}

/// Fixed-size character grid the game is played on.
///
/// Border cells (row 0, last row, column 0, last column) are never written by
/// gameplay drawing; all simulation bounds are expressed in interior terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Playfield {
    pub width: u16,
    pub height: u16,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

impl Playfield {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// First interior column.
    pub const fn left(&self) -> u16 {
        1
    }

    /// Last interior column.
    pub const fn right(&self) -> u16 {
        self.width.saturating_sub(2)
    }

    /// First interior row.
    pub const fn top(&self) -> u16 {
        1
    }

    /// Last interior row.
    pub const fn bottom(&self) -> u16 {
        self.height.saturating_sub(2)
    }

    /// Serve point (integer midpoint of the grid).
    pub const fn center(&self) -> (u16, u16) {
        (self.width / 2, self.height / 2)
    }

    /// Column of the paddle lane for `side`.
    pub const fn paddle_column(&self, side: Side) -> u16 {
        match side {
            Side::Left => PADDLE_INSET,
            Side::Right => self.width.saturating_sub(PADDLE_INSET + 1),
        }
    }

    /// Row-top a paddle starts at (and returns to on reset).
    pub const fn paddle_start_row(&self) -> u16 {
        (self.height / 2).saturating_sub(2)
    }

    /// Largest row-top that keeps a paddle inside the interior.
    pub const fn paddle_max_row(&self) -> u16 {
        self.height.saturating_sub(PADDLE_HEIGHT + 1)
    }

    /// Whether a signed cell coordinate lies inside the interior.
    pub fn in_interior(&self, x: i32, y: i32) -> bool {
        x >= self.left() as i32
            && x <= self.right() as i32
            && y >= self.top() as i32
            && y <= self.bottom() as i32
    }

    /// Clamp a signed cell coordinate into the interior.
    pub fn clamp_interior(&self, x: i32, y: i32) -> (u16, u16) {
        let cx = x.clamp(self.left() as i32, self.right() as i32);
        let cy = y.clamp(self.top() as i32, self.bottom() as i32);
        (cx as u16, cy as u16)
    }
}

/// Round a continuous coordinate to its grid cell.
///
/// Uses `f64::round` (half away from zero). Collision and drawing both go
/// through this so they always agree on which cell the ball occupies.
#[inline]
pub fn to_cell(v: f64) -> i32 {
    v.round() as i32
}

/// Which player / paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Horizontal travel direction of a serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// `-1.0` for leftward travel, `+1.0` for rightward.
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Direction pointing toward `side`.
    pub fn toward(side: Side) -> Self {
        match side {
            Side::Left => Direction::Left,
            Side::Right => Direction::Right,
        }
    }
}

/// Logical actions the input layer produces.
///
/// Any key that maps to none of these is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the left paddle one row up
    LeftUp,
    /// Move the left paddle one row down
    LeftDown,
    /// Move the right paddle one row up
    RightUp,
    /// Move the right paddle one row down
    RightDown,
    /// Zero both scores and re-center paddles and ball
    Reset,
    /// Leave the game loop
    Quit,
}

/// Fire-and-forget effect cues emitted by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    PaddleHit,
    WallHit,
    Score,
    ScoreSequence,
    GameStart,
}

impl EffectKind {
    pub const ALL: [EffectKind; 5] = [
        EffectKind::PaddleHit,
        EffectKind::WallHit,
        EffectKind::Score,
        EffectKind::ScoreSequence,
        EffectKind::GameStart,
    ];

    /// Stable lowercase name (used in logs and cached file names).
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::PaddleHit => "paddle_hit",
            EffectKind::WallHit => "wall_hit",
            EffectKind::Score => "score",
            EffectKind::ScoreSequence => "score_sequence",
            EffectKind::GameStart => "game_start",
        }
    }
}
