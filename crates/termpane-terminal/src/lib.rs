// ABOUTME: Terminal primitives used by the pane tree.
// ABOUTME: Cursor-addressed writes, screen clearing and size queries.

pub mod screen;
pub mod size;
pub mod writer;

pub use screen::{ScreenBuffer, WriteRecord};
pub use size::{CrosstermSize, FixedSize, SizeQuery};
pub use writer::{AnsiWriter, CursorWriter};

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
