// ABOUTME: Terminal size queries.
// ABOUTME: Reports the surface as (columns, rows) or an error the caller may ignore.

use crate::TerminalError;

/// Source of the current terminal dimensions
pub trait SizeQuery {
    /// Current size as (width, height) in cells
    fn size(&mut self) -> Result<(usize, usize), TerminalError>;
}

/// Asks the controlling terminal through crossterm
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermSize;

impl SizeQuery for CrosstermSize {
    fn size(&mut self) -> Result<(usize, usize), TerminalError> {
        let (columns, rows) = crossterm::terminal::size()?;
        Ok((usize::from(columns), usize::from(rows)))
    }
}

/// A size fixed by the caller, e.g. for headless rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize {
    pub width: usize,
    pub height: usize,
}

impl FixedSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl SizeQuery for FixedSize {
    fn size(&mut self) -> Result<(usize, usize), TerminalError> {
        Ok((self.width, self.height))
    }
}

impl<F> SizeQuery for F
where
    F: FnMut() -> Result<(usize, usize), TerminalError>,
{
    fn size(&mut self) -> Result<(usize, usize), TerminalError> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_reports_itself() {
        let mut size = FixedSize::new(80, 24);
        assert_eq!(size.size().unwrap(), (80, 24));
    }

    #[test]
    fn closure_is_a_size_query() {
        let mut calls = 0;
        let mut query = || -> Result<(usize, usize), TerminalError> {
            calls += 1;
            Ok((10, 5))
        };
        assert_eq!(SizeQuery::size(&mut query).unwrap(), (10, 5));
        drop(query);
        assert_eq!(calls, 1);
    }
}
