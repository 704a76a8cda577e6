// ABOUTME: The terminal surface owning the root pane, the writer and the size query.
// ABOUTME: Each tick refreshes the size, redraws on change and iterates every leaf.

use termpane_terminal::{CursorWriter, SizeQuery, TerminalError};

use crate::Pane;

/// Descriptive metadata carried by a surface; never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceInfo {
    pub name: String,
    pub description: String,
    pub author: String,
}

impl SurfaceInfo {
    pub fn new(name: &str, description: &str, author: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            author: author.to_string(),
        }
    }
}

/// Called after the screen is cleared and before the tree is redrawn,
/// with the new surface width and height
pub type SurfaceHook = Box<dyn FnMut(&mut dyn CursorWriter, usize, usize)>;

/// One physical terminal and the pane tree bound to it.
pub struct Surface<W: CursorWriter, S: SizeQuery> {
    info: SurfaceInfo,
    writer: W,
    size_query: S,
    width: usize,
    height: usize,
    sized: bool,
    root: Pane,
    on_draw: Option<SurfaceHook>,
}

impl<W: CursorWriter, S: SizeQuery> Surface<W, S> {
    /// The root pane stays unsized until the first successful size refresh
    pub fn new(info: SurfaceInfo, writer: W, size_query: S) -> Self {
        Self {
            info,
            writer,
            size_query,
            width: 0,
            height: 0,
            sized: false,
            root: Pane::new("main"),
            on_draw: None,
        }
    }

    pub fn info(&self) -> &SurfaceInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn description(&self) -> &str {
        &self.info.description
    }

    pub fn author(&self) -> &str {
        &self.info.author
    }

    /// Cached width from the last successful size query
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cached height from the last successful size query
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a size query has ever succeeded
    pub fn is_sized(&self) -> bool {
        self.sized
    }

    pub fn root(&self) -> &Pane {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Pane {
        &mut self.root
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn set_on_draw(&mut self, hook: impl FnMut(&mut dyn CursorWriter, usize, usize) + 'static) {
        self.on_draw = Some(Box::new(hook));
    }

    /// Query the terminal size and relayout the tree if it changed.
    ///
    /// A failed query keeps the cached size. Returns true when the tree was
    /// resized.
    pub fn refresh_size(&mut self) -> bool {
        let (width, height) = match self.size_query.size() {
            Ok(size) => size,
            Err(e) => {
                tracing::warn!("Failed to query terminal size: {}", e);
                return false;
            }
        };
        if self.sized && width == self.width && height == self.height {
            return false;
        }

        tracing::info!("Surface {} resized to {}x{}", self.info.name, width, height);
        self.width = width;
        self.height = height;
        self.sized = true;
        self.root.set_width(width);
        self.root.set_height(height);
        true
    }

    /// Reapply the cached size after the tree was restructured
    pub fn relayout(&mut self) {
        self.root.relayout();
    }

    pub fn clear(&mut self) {
        self.writer.clear();
    }

    /// Clear the screen, run the surface hook and draw every pane
    pub fn draw(&mut self) {
        self.writer.clear();
        if let Some(hook) = self.on_draw.as_mut() {
            hook(&mut self.writer, self.width, self.height);
        }
        self.root.draw(&mut self.writer);
    }

    /// Run the iterate callback of every leaf
    pub fn iterate(&mut self) {
        self.root.iterate(&mut self.writer);
    }

    /// One refresh cycle. Returns whether the tree was redrawn.
    ///
    /// Nothing is drawn or iterated before the size is known.
    pub fn tick(&mut self) -> Result<bool, TerminalError> {
        let resized = self.refresh_size();
        if resized {
            self.draw();
        }
        if self.sized {
            self.iterate();
        }
        self.writer.flush()?;
        Ok(resized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io;
    use std::rc::Rc;
    use termpane_core::{BorderStyle, SplitUnit};
    use termpane_terminal::ScreenBuffer;

    /// Replays a fixed list of query results, then repeats the last one
    struct Scripted {
        results: VecDeque<Option<(usize, usize)>>,
        last: Option<(usize, usize)>,
    }

    impl Scripted {
        fn new(results: &[Option<(usize, usize)>]) -> Self {
            Self {
                results: results.iter().copied().collect(),
                last: None,
            }
        }
    }

    impl SizeQuery for Scripted {
        fn size(&mut self) -> Result<(usize, usize), TerminalError> {
            if let Some(next) = self.results.pop_front() {
                self.last = next;
            }
            self.last
                .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no tty").into())
        }
    }

    /// Screen buffer whose first `failures` flushes fail
    struct FlakyFlush {
        screen: ScreenBuffer,
        failures: usize,
    }

    impl CursorWriter for FlakyFlush {
        fn write(&mut self, column: usize, row: usize, text: &str) {
            self.screen.write(column, row, text);
        }

        fn clear(&mut self) {
            self.screen.clear();
        }

        fn flush(&mut self) -> Result<(), TerminalError> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed").into());
            }
            Ok(())
        }
    }

    fn surface(results: &[Option<(usize, usize)>]) -> Surface<ScreenBuffer, Scripted> {
        Surface::new(
            SurfaceInfo::new("test", "a test surface", "nobody"),
            ScreenBuffer::new(20, 6),
            Scripted::new(results),
        )
    }

    #[test]
    fn metadata_is_kept() {
        let surface = surface(&[]);
        assert_eq!(surface.name(), "test");
        assert_eq!(surface.description(), "a test surface");
        assert_eq!(surface.author(), "nobody");
        assert!(!surface.is_sized());
        assert_eq!(surface.root().width(), 0);
    }

    #[test]
    fn first_tick_sizes_and_draws() {
        let mut surface = surface(&[Some((20, 6))]);
        surface.root_mut().set_style(Some(BorderStyle::frame()));

        assert!(surface.tick().unwrap());
        assert_eq!((surface.width(), surface.height()), (20, 6));
        assert_eq!(surface.root().width(), 20);
        assert_eq!(surface.writer().clear_count(), 1);
        assert_eq!(surface.writer().row_text(0), format!("┌{}┐", "─".repeat(18)));
    }

    #[test]
    fn unchanged_size_only_iterates() {
        let iterations = Rc::new(RefCell::new(0));
        let mut surface = surface(&[Some((20, 6))]);
        let i = Rc::clone(&iterations);
        surface.root_mut().set_on_iterate(move |_, _| *i.borrow_mut() += 1);

        assert!(surface.tick().unwrap());
        assert!(!surface.tick().unwrap());
        assert!(!surface.tick().unwrap());
        assert_eq!(surface.writer().clear_count(), 1);
        assert_eq!(*iterations.borrow(), 3);
    }

    #[test]
    fn failed_query_keeps_cached_size() {
        let mut surface = surface(&[Some((20, 6)), None]);
        assert!(surface.tick().unwrap());
        assert!(!surface.tick().unwrap());
        assert_eq!((surface.width(), surface.height()), (20, 6));
        assert_eq!(surface.writer().clear_count(), 1);
    }

    #[test]
    fn nothing_runs_before_first_size() {
        let iterations = Rc::new(RefCell::new(0));
        let mut surface = surface(&[None]);
        let i = Rc::clone(&iterations);
        surface.root_mut().set_on_iterate(move |_, _| *i.borrow_mut() += 1);

        assert!(!surface.tick().unwrap());
        assert!(!surface.tick().unwrap());
        assert_eq!(*iterations.borrow(), 0);
        assert!(surface.writer().writes().is_empty());
    }

    #[test]
    fn resize_relayouts_and_redraws() {
        let mut surface = surface(&[Some((80, 24)), Some((81, 24))]);
        surface.root_mut().split_vertically(50, SplitUnit::Percent);

        surface.tick().unwrap();
        assert_eq!(surface.root().child(0).unwrap().width(), 40);
        assert!(surface.tick().unwrap());
        assert_eq!(surface.root().child(0).unwrap().width(), 41);
        assert_eq!(surface.root().child(1).unwrap().width(), 40);
        assert_eq!(surface.writer().clear_count(), 2);
    }

    #[test]
    fn hook_runs_between_clear_and_tree() {
        let mut surface = surface(&[Some((20, 6))]);
        surface.set_on_draw(|out, width, _| out.write(0, 0, &format!("w={width}")));
        surface
            .root_mut()
            .set_on_draw(|p, out| p.write(out, 0, 1, "pane", false));

        surface.tick().unwrap();
        let texts: Vec<_> = surface.writer().writes().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["w=20", "pane"]);
    }

    #[test]
    fn zero_size_still_counts_as_sized() {
        let mut surface = surface(&[Some((0, 0))]);
        assert!(surface.tick().unwrap());
        assert!(surface.is_sized());
    }

    #[test]
    fn flush_failure_is_reported_and_next_tick_runs() {
        let iterations = Rc::new(RefCell::new(0));
        let writer = FlakyFlush {
            screen: ScreenBuffer::new(20, 6),
            failures: 1,
        };
        let mut surface = Surface::new(SurfaceInfo::default(), writer, Scripted::new(&[Some((20, 6))]));
        let i = Rc::clone(&iterations);
        surface.root_mut().set_on_iterate(move |_, _| *i.borrow_mut() += 1);

        assert!(matches!(surface.tick(), Err(TerminalError::Io(_))));
        assert!(surface.is_sized());
        assert_eq!(*iterations.borrow(), 1);

        assert!(!surface.tick().unwrap());
        assert_eq!(*iterations.borrow(), 2);
        assert_eq!(surface.writer().screen.clear_count(), 1);
    }
}
