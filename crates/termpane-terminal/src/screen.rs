// ABOUTME: Headless cursor writer backed by an in-memory character grid.
// ABOUTME: Records every write so layouts can be rendered and inspected without a tty.

use crate::CursorWriter;

/// One call to [`CursorWriter::write`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub column: usize,
    pub row: usize,
    pub text: String,
}

/// A fixed-size grid that paints written text one char per cell.
///
/// Text running past the right or bottom edge is dropped from the grid but
/// still recorded in the write log.
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    width: usize,
    height: usize,
    grid: Vec<Vec<char>>,
    writes: Vec<WriteRecord>,
    clears: usize,
}

impl ScreenBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: vec![vec![' '; width]; height],
            writes: Vec::new(),
            clears: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Change the grid size, discarding its contents
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.grid = vec![vec![' '; width]; height];
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(column)).copied()
    }

    /// A row of the grid as a string, trailing blanks included
    pub fn row_text(&self, row: usize) -> String {
        self.grid.get(row).map(|r| r.iter().collect()).unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|row| self.row_text(row)).collect()
    }

    pub fn writes(&self) -> &[WriteRecord] {
        &self.writes
    }

    /// Drain the write log, leaving the grid untouched
    pub fn take_writes(&mut self) -> Vec<WriteRecord> {
        std::mem::take(&mut self.writes)
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl CursorWriter for ScreenBuffer {
    fn write(&mut self, column: usize, row: usize, text: &str) {
        self.writes.push(WriteRecord {
            column,
            row,
            text: text.to_string(),
        });

        let Some(cells) = self.grid.get_mut(row) else {
            return;
        };
        for (offset, c) in text.chars().enumerate() {
            match cells.get_mut(column + offset) {
                Some(cell) => *cell = c,
                None => break,
            }
        }
    }

    fn clear(&mut self) {
        self.clears += 1;
        for row in &mut self.grid {
            row.fill(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paints_text_into_grid() {
        let mut screen = ScreenBuffer::new(6, 2);
        screen.write(1, 1, "abc");
        assert_eq!(screen.row_text(0), "      ");
        assert_eq!(screen.row_text(1), " abc  ");
        assert_eq!(screen.cell(2, 1), Some('b'));
    }

    #[test]
    fn wide_glyphs_take_one_cell() {
        let mut screen = ScreenBuffer::new(3, 1);
        screen.write(0, 0, "┌─┐");
        assert_eq!(screen.row_text(0), "┌─┐");
    }

    #[test]
    fn overflow_is_dropped_but_logged() {
        let mut screen = ScreenBuffer::new(3, 1);
        screen.write(2, 0, "xyz");
        screen.write(0, 4, "off");
        assert_eq!(screen.row_text(0), "  x");
        assert_eq!(screen.writes().len(), 2);
        assert_eq!(screen.writes()[1].row, 4);
    }

    #[test]
    fn clear_blanks_grid_and_counts() {
        let mut screen = ScreenBuffer::new(2, 1);
        screen.write(0, 0, "ab");
        screen.clear();
        assert_eq!(screen.row_text(0), "  ");
        assert_eq!(screen.clear_count(), 1);
        assert_eq!(screen.take_writes().len(), 1);
        assert!(screen.writes().is_empty());
    }

    #[test]
    fn resize_discards_contents() {
        let mut screen = ScreenBuffer::new(2, 1);
        screen.write(0, 0, "ab");
        screen.resize(3, 2);
        assert_eq!(screen.lines(), vec!["   ".to_string(), "   ".to_string()]);
    }
}
