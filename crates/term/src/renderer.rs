//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each flush is encoded into an in-memory byte buffer first and written with
//! a single `write_all`, so the terminal never shows a half-drawn frame.
//! Color escapes are only emitted when the next cell's color pair differs
//! from the active one; a run of same-colored cells costs one switch.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// How [`TerminalRenderer::display`] encodes a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushMode {
    /// Home the cursor and rewrite every cell.
    #[default]
    Full,
    /// After the first frame, rewrite only runs of cells that changed.
    Diff,
}

/// Counters for one encoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlushStats {
    pub cells: usize,
    pub color_changes: usize,
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    mode: FlushMode,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            mode: FlushMode::Full,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn with_mode(mut self, mode: FlushMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Switch the terminal into game mode (raw, alternate screen, no cursor).
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle("Pong"))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next diff-mode flush to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame to the terminal.
    pub fn display(&mut self, fb: &FrameBuffer) -> Result<FlushStats> {
        self.buf.clear();

        let stats = match self.mode {
            FlushMode::Full => encode_full_into(fb, &mut self.buf)?,
            FlushMode::Diff => match self.last.as_mut() {
                Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                    let stats = encode_diff_into(prev, fb, &mut self.buf)?;
                    prev.copy_from(fb);
                    stats
                }
                Some(prev) => {
                    let stats = encode_full_into(fb, &mut self.buf)?;
                    prev.copy_from(fb);
                    stats
                }
                None => {
                    let stats = encode_full_into(fb, &mut self.buf)?;
                    self.last = Some(fb.clone());
                    stats
                }
            },
        };

        self.flush_buf()?;
        Ok(stats)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Tracks the terminal's active colors and attributes while encoding.
#[derive(Debug, Default)]
struct StyleState {
    colors: Option<(Rgb, Rgb)>,
    attrs: Option<(bool, bool)>,
    stats: FlushStats,
}

impl StyleState {
    fn print_cell(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        self.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
        self.stats.cells += 1;
        Ok(())
    }

    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let colors = (style.fg, style.bg);
        if self.colors != Some(colors) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
            self.colors = Some(colors);
            self.stats.color_changes += 1;
        }

        // NormalIntensity clears bold/dim without touching colors.
        let attrs = (style.bold, style.dim);
        if self.attrs != Some(attrs) {
            out.queue(SetAttribute(Attribute::NormalIntensity))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.attrs = Some(attrs);
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<FlushStats> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(self.stats)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// The cursor is homed first so repeated flushes overwrite in place.
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<FlushStats> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut state = StyleState::default();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            state.print_cell(out, fb.get(x, y).unwrap_or_default())?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    state.finish(out)
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<FlushStats> {
    let mut state = StyleState::default();

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            state.print_cell(out, next.get(x + dx, y).unwrap_or_default())?;
        }
        Ok(())
    })?;

    state.finish(out)
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            let len = x - start;
            f(start, y, len)?;
        }
    }

    Ok(())
}
