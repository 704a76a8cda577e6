// ABOUTME: Cursor-addressed output to the physical terminal.
// ABOUTME: Homes the cursor, steps right/down to the target cell and prints verbatim.

use std::io::{self, Write};

use crossterm::cursor::{MoveDown, MoveRight, MoveTo};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::TerminalError;

/// Sink for absolute cell writes.
///
/// Writes never wrap or clip; callers keep text inside the surface.
pub trait CursorWriter {
    /// Emit `text` starting at the absolute cell (`column`, `row`)
    fn write(&mut self, column: usize, row: usize, text: &str);

    /// Clear the visible screen and home the cursor
    fn clear(&mut self);

    /// Push buffered output to the underlying sink
    fn flush(&mut self) -> Result<(), TerminalError> {
        Ok(())
    }
}

/// Buffers ANSI escape sequences and hands them to `sink` on flush.
pub struct AnsiWriter<W: Write> {
    sink: W,
    buffer: Vec<u8>,
}

impl AnsiWriter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            buffer: Vec::new(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Bytes queued since the last flush
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Terminal cursor offsets are 16 bit; anything larger is off screen anyway.
fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn queue_write(out: &mut impl Write, column: usize, row: usize, text: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;
    // A zero count still moves one cell on most terminals
    if column > 0 {
        queue!(out, MoveRight(cells(column)))?;
    }
    if row > 0 {
        queue!(out, MoveDown(cells(row)))?;
    }
    queue!(out, Print(text))
}

impl<W: Write> CursorWriter for AnsiWriter<W> {
    fn write(&mut self, column: usize, row: usize, text: &str) {
        if let Err(e) = queue_write(&mut self.buffer, column, row, text) {
            tracing::warn!("Failed to queue write at {},{}: {}", column, row, e);
        }
    }

    fn clear(&mut self) {
        if let Err(e) = queue!(self.buffer, Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::warn!("Failed to queue screen clear: {}", e);
        }
    }

    fn flush(&mut self) -> Result<(), TerminalError> {
        if !self.buffer.is_empty() {
            self.sink.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        self.sink.flush()?;
        Ok(())
    }
}
