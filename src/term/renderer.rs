//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame after `enter` or `invalidate` is a full redraw; after
//! that only the cells that changed since the previous frame are rewritten,
//! coalesced into per-row runs so the cursor moves once per run.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw. Used on resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs the incoming frame against the one it retained
    /// last time, then keeps the new frame by swapping storage instead of
    /// cloning. The passed-in buffer comes back holding the old storage.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) => prev,
            None => FrameBuffer::new(0, 0),
        };

        if prev.width() != fb.width() || prev.height() != fb.height() {
            self.full_redraw(fb)?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.diff_redraw(fb, &prev)?;
        }

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current_style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                self.print_cell(cell.ch, cell.style, &mut current_style)?;
            }
        }

        self.finish_frame()
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut current_style: Option<CellStyle> = None;

        for y in 0..next.height() {
            let mut x = 0;
            while x < next.width() {
                if next.get(x, y) == prev.get(x, y) {
                    x += 1;
                    continue;
                }
                let end = dirty_run_end(prev, next, y, x);
                self.stdout.queue(cursor::MoveTo(x, y))?;
                for cx in x..end {
                    let cell = next.get(cx, y).unwrap_or_default();
                    self.print_cell(cell.ch, cell.style, &mut current_style)?;
                }
                x = end;
            }
        }

        self.finish_frame()
    }

    fn print_cell(
        &mut self,
        ch: char,
        style: CellStyle,
        current: &mut Option<CellStyle>,
    ) -> Result<()> {
        if *current != Some(style) {
            self.apply_style(style)?;
            *current = Some(style);
        }
        self.stdout.queue(Print(ch))?;
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        // Attribute reset clears colors too, so it must come first.
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Exclusive end of the dirty run starting at `start` in row `y`: the first
/// column at which the two frames agree again (or the row ends).
fn dirty_run_end(prev: &FrameBuffer, next: &FrameBuffer, y: u16, start: u16) -> u16 {
    let mut x = start;
    while x < next.width() && next.get(x, y) != prev.get(x, y) {
        x += 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::fb::{Cell, CellStyle};

    #[test]
    fn test_dirty_run_spans_adjacent_changes() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }

        assert_eq!(dirty_run_end(&a, &b, 0, 1), 4);
        // Equal prefix: a run started on an unchanged cell ends immediately.
        assert_eq!(dirty_run_end(&a, &b, 0, 0), 0);
        // Run at the right edge stops at the width.
        let mut c = FrameBuffer::new(6, 1);
        c.set(5, 0, Cell { ch: 'Y', style });
        assert_eq!(dirty_run_end(&a, &c, 0, 5), 6);
    }

    #[test]
    fn test_rgb_maps_to_crossterm_rgb() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            rgb_to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
