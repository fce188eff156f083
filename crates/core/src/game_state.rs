//! Game state module - owns and sequences every simulation entity
//!
//! This module ties together both paddles, the ball, the score pair and the
//! transient highlight timers. [`GameState::step`] runs the physics half of a
//! tick in a fixed order: integrate, wall bounce, paddle bounce, scoring,
//! timer decay. Input is applied separately (before `step`) through
//! [`GameState::apply_action`].

use arrayvec::ArrayVec;

use crate::ball::Ball;
use crate::paddle::Paddle;
use crate::snapshot::{BallSnapshot, GameSnapshot, TimersSnapshot};
use crate::types::{
    to_cell, Direction, GameAction, Playfield, Side, PADDLE_FLASH_TICKS, SCORE_FLASH_TICKS,
};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom interior boundary.
    WallBounce,
    /// Ball returned by the paddle on `Side`.
    PaddleBounce(Side),
    /// `scorer` won a point; `total` is their new score.
    Scored { scorer: Side, total: u32 },
}

/// Events produced by one [`GameState::step`]. At most one of each kind.
pub type TickEvents = ArrayVec<GameEvent, 4>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    playfield: Playfield,
    left: Paddle,
    right: Paddle,
    ball: Ball,
    left_score: u32,
    right_score: u32,
    left_flash: u8,
    right_flash: u8,
    score_flash: u8,
    score_flash_at: (u16, u16),
    /// Number of completed steps since creation.
    tick: u64,
}

impl GameState {
    /// Create a new game on `playfield`; `seed` drives serve angles.
    pub fn new(playfield: Playfield, seed: u32) -> Self {
        let (cx, cy) = playfield.center();
        let start_row = playfield.paddle_start_row();
        Self {
            playfield,
            left: Paddle::new(playfield.paddle_column(Side::Left), start_row),
            right: Paddle::new(playfield.paddle_column(Side::Right), start_row),
            ball: Ball::new(cx as f64, cy as f64, seed),
            left_score: 0,
            right_score: 0,
            left_flash: 0,
            right_flash: 0,
            score_flash: 0,
            score_flash_at: (cx, cy),
            tick: 0,
        }
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn left_paddle(&self) -> &Paddle {
        &self.left
    }

    pub fn right_paddle(&self) -> &Paddle {
        &self.right
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn left_score(&self) -> u32 {
        self.left_score
    }

    pub fn right_score(&self) -> u32 {
        self.right_score
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Apply one input action. `Quit` is a loop concern and is ignored here.
    pub fn apply_action(&mut self, action: GameAction) {
        let height = self.playfield.height;
        match action {
            GameAction::LeftUp => self.left.move_up(),
            GameAction::LeftDown => self.left.move_down(height),
            GameAction::RightUp => self.right.move_up(),
            GameAction::RightDown => self.right.move_down(height),
            GameAction::Reset => self.reset(),
            GameAction::Quit => {}
        }
    }

    /// Zero both scores and re-center paddles and ball. The serve goes right.
    pub fn reset(&mut self) {
        let start_row = self.playfield.paddle_start_row();
        let (cx, cy) = self.playfield.center();

        self.left_score = 0;
        self.right_score = 0;
        self.left.reset(self.playfield.paddle_column(Side::Left), start_row);
        self.right.reset(self.playfield.paddle_column(Side::Right), start_row);
        self.ball.reset(cx as f64, cy as f64, Direction::Right);
        self.left_flash = 0;
        self.right_flash = 0;
        self.score_flash = 0;
        self.score_flash_at = (cx, cy);
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) -> TickEvents {
        let mut events = TickEvents::new();
        self.tick = self.tick.wrapping_add(1);

        self.ball.update();

        // Stricter than "bounce whenever at or past a wall": only reflect while
        // heading into it. A ball still outside the boundary after a bounce
        // keeps moving inward instead of flipping back and sticking.
        let vy = self.ball.velocity().1;
        let y = self.ball.y();
        if (y <= self.playfield.top() as f64 && vy < 0.0)
            || (y >= self.playfield.bottom() as f64 && vy > 0.0)
        {
            self.ball.bounce_vertical();
            events.push(GameEvent::WallBounce);
        }

        if self.ball.check_paddle_collision(&self.left) {
            self.ball.bounce_horizontal();
            self.left_flash = PADDLE_FLASH_TICKS;
            events.push(GameEvent::PaddleBounce(Side::Left));
        } else if self.ball.check_paddle_collision(&self.right) {
            self.ball.bounce_horizontal();
            self.right_flash = PADDLE_FLASH_TICKS;
            events.push(GameEvent::PaddleBounce(Side::Right));
        }

        let right_edge = self.playfield.width.saturating_sub(1) as f64;
        if self.ball.x() <= 0.0 {
            let total = self.score_point(Side::Right);
            events.push(GameEvent::Scored {
                scorer: Side::Right,
                total,
            });
        } else if self.ball.x() >= right_edge {
            let total = self.score_point(Side::Left);
            events.push(GameEvent::Scored {
                scorer: Side::Left,
                total,
            });
        }

        self.left_flash = self.left_flash.saturating_sub(1);
        self.right_flash = self.right_flash.saturating_sub(1);
        self.score_flash = self.score_flash.saturating_sub(1);

        events
    }

    fn score_point(&mut self, scorer: Side) -> u32 {
        let total = match scorer {
            Side::Left => {
                self.left_score += 1;
                self.left_score
            }
            Side::Right => {
                self.right_score += 1;
                self.right_score
            }
        };

        let (bx, by) = (to_cell(self.ball.x()), to_cell(self.ball.y()));
        self.score_flash_at = self.playfield.clamp_interior(bx, by);
        self.score_flash = SCORE_FLASH_TICKS;

        let (cx, cy) = self.playfield.center();
        self.ball.reset(cx as f64, cy as f64, Direction::toward(scorer));
        total
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let (x, y) = self.ball.position();
        let (prev_x, prev_y) = self.ball.previous_position();
        GameSnapshot {
            playfield: self.playfield,
            left: self.left,
            right: self.right,
            ball: BallSnapshot {
                x,
                y,
                prev_x,
                prev_y,
            },
            left_score: self.left_score,
            right_score: self.right_score,
            timers: TimersSnapshot {
                left_flash: self.left_flash,
                right_flash: self.right_flash,
                score_flash: self.score_flash,
            },
            score_flash_at: self.score_flash_at,
            tick: self.tick,
        }
    }
}
