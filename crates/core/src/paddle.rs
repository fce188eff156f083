//! Paddle module - a vertical bar in a fixed column lane
//!
//! The paddle owns its movement clamping: row-top always stays inside
//! `[top, height - PADDLE_HEIGHT - 1]`, so the whole glyph span sits in the
//! interior. Moves past a bound are silently ignored.

use crate::types::PADDLE_HEIGHT;

/// Minimum row-top (first interior row).
const MIN_ROW: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    column: u16,
    row: u16,
}

impl Paddle {
    /// Paddle height in rows.
    pub const HEIGHT: u16 = PADDLE_HEIGHT;

    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Fixed horizontal lane.
    pub fn column(&self) -> u16 {
        self.column
    }

    /// Row of the top glyph.
    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn height(&self) -> u16 {
        Self::HEIGHT
    }

    /// Move up one row unless already at the top interior row.
    pub fn move_up(&mut self) {
        if self.row > MIN_ROW {
            self.row -= 1;
        }
    }

    /// Move down one row unless the bottom glyph would leave the interior of a
    /// playfield `playfield_height` rows tall.
    pub fn move_down(&mut self, playfield_height: u16) {
        let max_row = playfield_height.saturating_sub(Self::HEIGHT + 1);
        if self.row < max_row {
            self.row += 1;
        }
    }

    pub fn reset(&mut self, column: u16, row: u16) {
        self.column = column;
        self.row = row;
    }

    /// Whether `row` falls inside the paddle's hit span.
    ///
    /// Both ends are inclusive, so the hit span is `HEIGHT + 1` rows: one row
    /// taller than the glyph span.
    pub fn is_within_bounds(&self, row: i32) -> bool {
        let top = self.row as i32;
        row >= top && row <= top + Self::HEIGHT as i32
    }
}
