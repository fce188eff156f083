use crate::paddle::Paddle;
use crate::types::{Playfield, Side};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub x: f64,
    pub y: f64,
    pub prev_x: f64,
    pub prev_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimersSnapshot {
    pub left_flash: u8,
    pub right_flash: u8,
    pub score_flash: u8,
}

/// Read-only view of everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub playfield: Playfield,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: BallSnapshot,
    pub left_score: u32,
    pub right_score: u32,
    pub timers: TimersSnapshot,
    /// Interior cell the scoring burst is centered on.
    pub score_flash_at: (u16, u16),
    pub tick: u64,
}

impl GameSnapshot {
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn flash(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.timers.left_flash,
            Side::Right => self.timers.right_flash,
        }
    }

    pub fn scoring_effect_active(&self) -> bool {
        self.timers.score_flash > 0
    }
}
