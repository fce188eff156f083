//! Ball module - continuous position and velocity
//!
//! The ball integrates its velocity once per tick and responds to bounces.
//! Collision queries round the continuous position to the nearest cell
//! (see [`crate::types::to_cell`]); there is no swept collision, so a ball
//! faster than one cell per tick can step over a paddle column.

use crate::paddle::Paddle;
use crate::rng::SimpleRng;
use crate::types::{to_cell, Direction, BALL_BASE_SPEED, BALL_SPEED_INCREASE};

#[derive(Debug, Clone)]
pub struct Ball {
    x: f64,
    y: f64,
    prev_x: f64,
    prev_y: f64,
    vx: f64,
    vy: f64,
    rng: SimpleRng,
}

impl Ball {
    /// Create a ball at `(x, y)` serving rightward.
    pub fn new(x: f64, y: f64, seed: u32) -> Self {
        let mut ball = Self {
            x,
            y,
            prev_x: x,
            prev_y: y,
            vx: 0.0,
            vy: 0.0,
            rng: SimpleRng::new(seed),
        };
        ball.reset(x, y, Direction::Right);
        ball
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Position before the most recent [`Ball::update`].
    pub fn previous_position(&self) -> (f64, f64) {
        (self.prev_x, self.prev_y)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    /// Override the velocity. Serves normally come from [`Ball::reset`];
    /// this exists for scripted setups.
    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        self.vx = vx;
        self.vy = vy;
    }

    /// Teleport the ball without touching its velocity.
    pub fn place(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.prev_x = x;
        self.prev_y = y;
    }

    /// Rounded cell the ball currently occupies.
    pub fn cell(&self) -> (i32, i32) {
        (to_cell(self.x), to_cell(self.y))
    }

    /// Advance one integration step.
    pub fn update(&mut self) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Reflect off a top/bottom wall. Speed is unchanged.
    pub fn bounce_vertical(&mut self) {
        self.vy = -self.vy;
    }

    /// Reflect off a paddle and speed up both components.
    pub fn bounce_horizontal(&mut self) {
        self.vx = -self.vx * BALL_SPEED_INCREASE;
        self.vy *= BALL_SPEED_INCREASE;
    }

    /// Whether the ball sits in the cell directly in front of `paddle`, on the
    /// side it is approaching from, within the paddle's hit span.
    ///
    /// A ball that has already bounced is moving away from the paddle, so it
    /// never re-collides on the following tick.
    pub fn check_paddle_collision(&self, paddle: &Paddle) -> bool {
        let (bx, by) = self.cell();
        let col = paddle.column() as i32;

        let at_paddle_x = (bx == col - 1 && self.vx > 0.0) || (bx == col + 1 && self.vx < 0.0);

        at_paddle_x && paddle.is_within_bounds(by)
    }

    /// Serve from `(x, y)`: base horizontal speed in `direction`, fresh random
    /// vertical speed in `[-BASE/2, BASE/2)`. Rally amplification is dropped.
    pub fn reset(&mut self, x: f64, y: f64, direction: Direction) {
        self.place(x, y);
        self.vx = BALL_BASE_SPEED * direction.sign();
        self.vy = BALL_BASE_SPEED * (self.rng.next_f64() - 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_with(x: f64, y: f64, vx: f64, vy: f64) -> Ball {
        let mut b = Ball::new(x, y, 1);
        b.set_velocity(vx, vy);
        b
    }

    #[test]
    fn update_records_previous_position() {
        let mut b = ball_with(10.0, 5.0, 0.5, -0.25);
        for _ in 0..20 {
            let before = b.position();
            b.update();
            assert_eq!(b.previous_position(), before);
        }
        assert_eq!(b.position(), (20.0, 0.0));
    }

    #[test]
    fn bounce_horizontal_amplifies_both_components() {
        let mut b = ball_with(10.0, 5.0, 0.5, -0.2);
        let (vx0, vy0) = b.velocity();
        b.bounce_horizontal();
        let (vx1, vy1) = b.velocity();
        assert!(vx1 < 0.0);
        assert!(vx1.abs() > vx0.abs());
        assert!(vy1.abs() > vy0.abs());
        assert_eq!(vy1.signum(), vy0.signum());
    }

    #[test]
    fn bounce_horizontal_compounds_across_rallies() {
        let mut b = ball_with(10.0, 5.0, 0.5, 0.1);
        for _ in 0..4 {
            b.bounce_horizontal();
        }
        let expected = 0.5 * BALL_SPEED_INCREASE.powi(4);
        assert!((b.velocity().0 - expected).abs() < 1e-12);
    }

    #[test]
    fn bounce_vertical_flips_sign_only() {
        let mut b = ball_with(10.0, 5.0, -0.5, 0.2);
        b.bounce_vertical();
        assert_eq!(b.velocity(), (-0.5, -0.2));
    }

    #[test]
    fn reset_serves_at_base_speed_in_direction() {
        let mut b = ball_with(10.0, 5.0, 3.0, 2.0);
        b.bounce_horizontal();

        b.reset(40.0, 12.0, Direction::Right);
        assert_eq!(b.position(), (40.0, 12.0));
        assert_eq!(b.previous_position(), (40.0, 12.0));
        assert_eq!(b.velocity().0, BALL_BASE_SPEED);

        b.reset(40.0, 12.0, Direction::Left);
        assert_eq!(b.velocity().0, -BALL_BASE_SPEED);
    }

    #[test]
    fn reset_vertical_speed_stays_in_small_symmetric_range() {
        let mut b = Ball::new(40.0, 12.0, 4242);
        for _ in 0..500 {
            b.reset(40.0, 12.0, Direction::Left);
            let vy = b.velocity().1;
            assert!(vy >= -BALL_BASE_SPEED / 2.0 && vy < BALL_BASE_SPEED / 2.0);
        }
    }

    #[test]
    fn same_seed_same_serves() {
        let mut a = Ball::new(40.0, 12.0, 77);
        let mut b = Ball::new(40.0, 12.0, 77);
        for _ in 0..10 {
            a.reset(40.0, 12.0, Direction::Right);
            b.reset(40.0, 12.0, Direction::Right);
            assert_eq!(a.velocity(), b.velocity());
        }
    }

    #[test]
    fn collides_when_approaching_right_paddle() {
        let paddle = Paddle::new(77, 10);
        let b = ball_with(76.0, 12.0, 0.5, 0.0);
        assert!(b.check_paddle_collision(&paddle));
    }

    #[test]
    fn collides_when_approaching_left_paddle() {
        let paddle = Paddle::new(2, 10);
        let b = ball_with(3.2, 15.4, -0.5, 0.0);
        assert!(b.check_paddle_collision(&paddle));
    }

    #[test]
    fn no_collision_when_moving_away() {
        let left = Paddle::new(2, 10);
        // In front of the left paddle but already travelling right.
        let b = ball_with(3.0, 12.0, 0.525, 0.0);
        assert!(!b.check_paddle_collision(&left));

        let right = Paddle::new(77, 10);
        let b = ball_with(76.0, 12.0, -0.525, 0.0);
        assert!(!b.check_paddle_collision(&right));
    }

    #[test]
    fn no_collision_outside_hit_span() {
        let paddle = Paddle::new(2, 10);
        let above = ball_with(3.0, 9.0, -0.5, 0.0);
        let below = ball_with(3.0, 16.0, -0.5, 0.0);
        let edge = ball_with(3.0, 15.0, -0.5, 0.0);
        assert!(!above.check_paddle_collision(&paddle));
        assert!(!below.check_paddle_collision(&paddle));
        assert!(edge.check_paddle_collision(&paddle));
    }

    #[test]
    fn collision_uses_rounded_cell() {
        let paddle = Paddle::new(77, 10);
        // 75.5 rounds half away from zero to 76.
        let b = ball_with(75.5, 12.0, 0.5, 0.0);
        assert!(b.check_paddle_collision(&paddle));
        let b = ball_with(75.49, 12.0, 0.5, 0.0);
        assert!(!b.check_paddle_collision(&paddle));
    }
}
