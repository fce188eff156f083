//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every gameplay draw is clipped to the playfield interior, so the border
//! ring drawn by [`GameView::clear`] is never overwritten. Out-of-range
//! coordinates are skipped silently.

use crate::core::{BallSnapshot, GameSnapshot, Paddle};
use crate::fb::{decimal_width, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{to_cell, Playfield, Side, SCORE_FLASH_RADIUS};

pub const PADDLE_GLYPH: char = '█';
pub const BALL_GLYPH: char = '●';
pub const TRAIL_GLYPH: char = '·';
pub const CENTER_LINE_GLYPH: char = '╎';
pub const EFFECT_GLYPH: char = '*';

/// Rows between center-line dashes.
pub const CENTER_LINE_STRIDE: u16 = 2;

pub const CONTROLS_TEXT: &str = "W/S: Left | ↑/↓: Right | R: Reset | ESC: Quit";

const LEFT_LABEL: &str = "Player 1: ";
const RIGHT_LABEL: &str = "Player 2: ";

const BG: Rgb = Rgb::new(12, 12, 20);

/// Styles for every element of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: CellStyle,
    pub border: CellStyle,
    pub left_paddle: CellStyle,
    pub right_paddle: CellStyle,
    pub paddle_flash: CellStyle,
    pub ball: CellStyle,
    pub trail: CellStyle,
    pub center_line: CellStyle,
    pub score: CellStyle,
    pub controls: CellStyle,
    pub effect: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: CellStyle::new(Rgb::new(80, 80, 90), BG),
            border: CellStyle::new(Rgb::new(200, 200, 200), BG),
            left_paddle: CellStyle::new(Rgb::new(80, 220, 220), BG),
            right_paddle: CellStyle::new(Rgb::new(220, 120, 220), BG),
            paddle_flash: CellStyle::new(Rgb::new(255, 255, 255), BG).bold(),
            ball: CellStyle::new(Rgb::new(240, 220, 80), BG).bold(),
            trail: CellStyle::new(Rgb::new(140, 130, 70), BG).dim(),
            center_line: CellStyle::new(Rgb::new(90, 90, 100), BG).dim(),
            score: CellStyle::new(Rgb::new(220, 220, 220), BG).bold(),
            controls: CellStyle::new(Rgb::new(140, 140, 150), BG),
            effect: CellStyle::new(Rgb::new(255, 165, 0), BG).bold(),
        }
    }
}

/// A lightweight terminal renderer for the Pong playfield.
#[derive(Debug, Clone)]
pub struct GameView {
    playfield: Playfield,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(Playfield::default())
    }
}

impl GameView {
    pub fn new(playfield: Playfield) -> Self {
        Self {
            playfield,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The cell every interior position holds after [`GameView::clear`].
    pub fn background_cell(&self) -> Cell {
        self.palette.background.cell(' ')
    }

    /// Render a full frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer
    /// across frames; it is only resized if its size is wrong.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        self.clear(fb);

        for side in [Side::Left, Side::Right] {
            let style = self.paddle_style(side, snap.flash(side));
            self.draw_paddle(fb, snap.paddle(side), style);
        }
        self.draw_ball(fb, &snap.ball);
        self.draw_ball_trail(fb, (snap.ball.prev_x, snap.ball.prev_y));
        self.draw_center_line(fb);
        self.draw_score(fb, snap.left_score, snap.right_score);
        self.draw_controls(fb);
        if snap.scoring_effect_active() {
            let (cx, cy) = snap.score_flash_at;
            self.draw_scoring_effect(fb, cx, cy);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.playfield.width, self.playfield.height);
        self.render_into(snap, &mut fb);
        fb
    }

    fn paddle_style(&self, side: Side, flash: u8) -> CellStyle {
        if flash > 0 {
            return self.palette.paddle_flash;
        }
        match side {
            Side::Left => self.palette.left_paddle,
            Side::Right => self.palette.right_paddle,
        }
    }

    /// Reset every cell to the background and redraw the border.
    pub fn clear(&self, fb: &mut FrameBuffer) {
        fb.resize(self.playfield.width, self.playfield.height);
        fb.clear(self.background_cell());
        self.draw_border(fb);
    }

    fn draw_border(&self, fb: &mut FrameBuffer) {
        let (w, h) = (self.playfield.width, self.playfield.height);
        if w < 2 || h < 2 {
            return;
        }
        let style = self.palette.border;

        fb.put_char(0, 0, '┌', style);
        fb.put_char(w - 1, 0, '┐', style);
        fb.put_char(0, h - 1, '└', style);
        fb.put_char(w - 1, h - 1, '┘', style);

        for x in 1..w - 1 {
            fb.put_char(x, 0, '─', style);
            fb.put_char(x, h - 1, '─', style);
        }
        for y in 1..h - 1 {
            fb.put_char(0, y, '│', style);
            fb.put_char(w - 1, y, '│', style);
        }
    }

    /// Write `ch` at a signed position if it lies inside the interior.
    fn put_interior(&self, fb: &mut FrameBuffer, x: i32, y: i32, ch: char, style: CellStyle) {
        if self.playfield.in_interior(x, y) {
            fb.put_char(x as u16, y as u16, ch, style);
        }
    }

    fn put_interior_str(&self, fb: &mut FrameBuffer, x: i32, y: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            self.put_interior(fb, x + i as i32, y, ch, style);
        }
    }

    fn is_background(&self, fb: &FrameBuffer, x: i32, y: i32) -> bool {
        self.playfield.in_interior(x, y)
            && fb.get(x as u16, y as u16) == Some(self.background_cell())
    }

    pub fn draw_paddle(&self, fb: &mut FrameBuffer, paddle: &Paddle, style: CellStyle) {
        let x = paddle.column() as i32;
        let top = paddle.row() as i32;
        for dy in 0..paddle.height() as i32 {
            self.put_interior(fb, x, top + dy, PADDLE_GLYPH, style);
        }
    }

    pub fn draw_ball(&self, fb: &mut FrameBuffer, ball: &BallSnapshot) {
        let (x, y) = (to_cell(ball.x), to_cell(ball.y));
        self.put_interior(fb, x, y, BALL_GLYPH, self.palette.ball);
    }

    /// Faint marker at the ball's previous cell. Only lands on background
    /// cells, so it never covers a paddle, the border or the ball itself.
    pub fn draw_ball_trail(&self, fb: &mut FrameBuffer, previous: (f64, f64)) {
        let (x, y) = (to_cell(previous.0), to_cell(previous.1));
        if self.is_background(fb, x, y) {
            fb.put_char(x as u16, y as u16, TRAIL_GLYPH, self.palette.trail);
        }
    }

    /// Dashed divider down the middle column. Dashes only fill background
    /// cells so the ball stays visible when it crosses.
    pub fn draw_center_line(&self, fb: &mut FrameBuffer) {
        let x = (self.playfield.width / 2) as i32;
        let top = self.playfield.top();
        for y in top..=self.playfield.bottom() {
            if (y - top) % CENTER_LINE_STRIDE != 0 {
                continue;
            }
            if self.is_background(fb, x, y as i32) {
                fb.put_char(x as u16, y, CENTER_LINE_GLYPH, self.palette.center_line);
            }
        }
    }

    /// `Player 1: N` left-aligned and `Player 2: N` right-aligned on the top
    /// interior row.
    pub fn draw_score(&self, fb: &mut FrameBuffer, left: u32, right: u32) {
        let style = self.palette.score;
        let y = self.playfield.top() as i32;

        let left_x = 2;
        self.put_interior_str(fb, left_x, y, LEFT_LABEL, style);
        self.put_interior_u32(fb, left_x + LEFT_LABEL.len() as i32, y, left, style);

        let right_len = (RIGHT_LABEL.len() as u16 + decimal_width(right)) as i32;
        let right_x = self.playfield.width as i32 - right_len - 2;
        self.put_interior_str(fb, right_x, y, RIGHT_LABEL, style);
        self.put_interior_u32(fb, right_x + RIGHT_LABEL.len() as i32, y, right, style);
    }

    fn put_interior_u32(&self, fb: &mut FrameBuffer, x: i32, y: i32, value: u32, style: CellStyle) {
        let width = decimal_width(value) as i32;
        let fits = self.playfield.in_interior(x, y) && self.playfield.in_interior(x + width - 1, y);
        if fits {
            fb.put_u32(x as u16, y as u16, value, style);
        }
    }

    /// Key help centered on the bottom interior row.
    pub fn draw_controls(&self, fb: &mut FrameBuffer) {
        let len = CONTROLS_TEXT.chars().count() as i32;
        let x = (self.playfield.width as i32 - len) / 2;
        let y = self.playfield.bottom() as i32;
        self.put_interior_str(fb, x, y, CONTROLS_TEXT, self.palette.controls);
    }

    /// Diamond-shaped burst around `(center_x, center_y)`, clipped to the
    /// interior.
    pub fn draw_scoring_effect(&self, fb: &mut FrameBuffer, center_x: u16, center_y: u16) {
        let r = SCORE_FLASH_RADIUS as i32;
        let (cx, cy) = (center_x as i32, center_y as i32);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx.abs() + dy.abs() > r {
                    continue;
                }
                self.put_interior(fb, cx + dx, cy + dy, EFFECT_GLYPH, self.palette.effect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn snap() -> GameSnapshot {
        GameState::new(Playfield::default(), 1).snapshot()
    }

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
    }

    #[test]
    fn clear_draws_border_and_background() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(1, 1);
        view.clear(&mut fb);
        assert_eq!((fb.width(), fb.height()), (80, 25));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(79, 24).unwrap().ch, '┘');
        assert_eq!(fb.get(40, 0).unwrap().ch, '─');
        assert_eq!(fb.get(0, 12).unwrap().ch, '│');
        assert_eq!(fb.get(5, 5), Some(view.background_cell()));
    }

    #[test]
    fn paddle_is_clipped_to_interior() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 25);
        view.clear(&mut fb);
        // Deliberately out of range: rows 22..=26.
        let paddle = Paddle::new(2, 22);
        view.draw_paddle(&mut fb, &paddle, view.palette().left_paddle);
        assert_eq!(fb.get(2, 22).unwrap().ch, PADDLE_GLYPH);
        assert_eq!(fb.get(2, 23).unwrap().ch, PADDLE_GLYPH);
        assert_eq!(fb.get(2, 24).unwrap().ch, '─');
    }

    #[test]
    fn ball_outside_interior_is_skipped() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 25);
        view.clear(&mut fb);
        let before = fb.clone();
        let ball = BallSnapshot {
            x: -0.4,
            y: 12.0,
            prev_x: 0.1,
            prev_y: 12.0,
        };
        view.draw_ball(&mut fb, &ball);
        view.draw_ball_trail(&mut fb, (ball.prev_x, ball.prev_y));
        assert_eq!(fb, before);
    }

    #[test]
    fn trail_never_covers_ball_or_paddle() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 25);
        view.clear(&mut fb);
        let paddle = Paddle::new(2, 10);
        view.draw_paddle(&mut fb, &paddle, view.palette().left_paddle);
        view.draw_ball_trail(&mut fb, (2.0, 11.0));
        assert_eq!(fb.get(2, 11).unwrap().ch, PADDLE_GLYPH);

        let ball = BallSnapshot {
            x: 30.2,
            y: 8.0,
            prev_x: 29.9,
            prev_y: 8.1,
        };
        view.draw_ball(&mut fb, &ball);
        view.draw_ball_trail(&mut fb, (ball.prev_x, ball.prev_y));
        assert_eq!(fb.get(30, 8).unwrap().ch, BALL_GLYPH);

        view.draw_ball_trail(&mut fb, (20.0, 8.0));
        assert_eq!(fb.get(20, 8).unwrap().ch, TRAIL_GLYPH);
    }

    #[test]
    fn center_line_is_dashed_and_skips_border() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 25);
        view.clear(&mut fb);
        view.draw_center_line(&mut fb);
        assert_eq!(fb.get(40, 0).unwrap().ch, '─');
        assert_eq!(fb.get(40, 24).unwrap().ch, '─');
        assert_eq!(fb.get(40, 1).unwrap().ch, CENTER_LINE_GLYPH);
        assert_eq!(fb.get(40, 2).unwrap().ch, ' ');
        assert_eq!(fb.get(40, 3).unwrap().ch, CENTER_LINE_GLYPH);
    }

    #[test]
    fn score_text_is_aligned() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 25);
        view.clear(&mut fb);
        view.draw_score(&mut fb, 3, 12);
        let row = row_text(&fb, 1);
        // "Player 2: 12" ends two columns before the right edge.
        assert_eq!(row, format!("│ Player 1: 3{}Player 2: 12 │", " ".repeat(53)));
    }

    #[test]
    fn controls_are_centered_on_bottom_interior_row() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 25);
        view.clear(&mut fb);
        view.draw_controls(&mut fb);
        let row = row_text(&fb, 23);
        assert!(row.contains(CONTROLS_TEXT));
        let len = CONTROLS_TEXT.chars().count() as u16;
        let x = (80 - len) / 2;
        assert_eq!(fb.get(x, 23).unwrap().ch, 'W');
    }

    #[test]
    fn scoring_effect_is_clipped_to_interior() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(80, 25);
        view.clear(&mut fb);
        view.draw_scoring_effect(&mut fb, 1, 12);
        assert_eq!(fb.get(1, 12).unwrap().ch, EFFECT_GLYPH);
        assert_eq!(fb.get(3, 12).unwrap().ch, EFFECT_GLYPH);
        assert_eq!(fb.get(1, 10).unwrap().ch, EFFECT_GLYPH);
        assert_eq!(fb.get(0, 12).unwrap().ch, '│');
        assert_eq!(fb.get(4, 12).unwrap().ch, ' ');
    }

    #[test]
    fn flashing_paddle_uses_highlight_style() {
        let view = GameView::default();
        let mut s = snap();
        s.timers.right_flash = 2;
        let fb = view.render(&s);
        let right = fb.get(77, 12).unwrap();
        assert_eq!(right.ch, PADDLE_GLYPH);
        assert_eq!(right.style, view.palette().paddle_flash);
        let left = fb.get(2, 12).unwrap();
        assert_eq!(left.style, view.palette().left_paddle);
    }

    #[test]
    fn full_render_shows_ball_at_center() {
        let view = GameView::default();
        let fb = view.render(&snap());
        assert_eq!(fb.get(40, 12).unwrap().ch, BALL_GLYPH);
        assert!(row_text(&fb, 1).contains("Player 1: 0"));
        assert!(row_text(&fb, 1).contains("Player 2: 0"));
    }
}
