// ABOUTME: Binary tree of terminal panes with geometry and leaf callbacks.
// ABOUTME: Setting a size recomputes every descendant; draw/iterate recurse to the leaves.

use std::fmt;

use termpane_core::{BorderStyle, SplitKind, SplitUnit};
use termpane_terminal::CursorWriter;

use crate::border;
use crate::split::split_values;

/// Leaf behaviour attached to a pane. Receives the pane and the surface writer.
pub type PaneCallback = Box<dyn FnMut(&Pane, &mut dyn CursorWriter)>;

/// Marker written in the corner of a pane that cannot fit its contents
pub const TOO_SMALL_MARKER: &str = "!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Width,
    Height,
}

/// The two children of a split pane and how space is divided between them.
#[derive(Debug)]
pub struct Split {
    kind: SplitKind,
    value: i32,
    unit: SplitUnit,
    children: Box<[Pane; 2]>,
}

impl Split {
    pub fn kind(&self) -> SplitKind {
        self.kind
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn unit(&self) -> SplitUnit {
        self.unit
    }

    pub fn children(&self) -> &[Pane; 2] {
        &self.children
    }

    fn divides(&self, axis: Axis) -> bool {
        match axis {
            Axis::Width => self.kind.partitions_width(),
            Axis::Height => self.kind.partitions_height(),
        }
    }
}

/// A rectangular region of the terminal: either a leaf that renders content
/// or a split node whose two children partition its area along one axis.
///
/// Geometry is absolute, in terminal cells. A pane whose assigned size cannot
/// hold its minimum size plus border (or whose split would leave a child
/// empty) is "too small": it draws a `!` marker instead of its contents and
/// leaves the geometry of its children untouched.
pub struct Pane {
    name: String,
    split: Option<Split>,
    width: usize,
    height: usize,
    left: usize,
    top: usize,
    min_width: usize,
    min_height: usize,
    too_narrow: bool,
    too_short: bool,
    style: Option<BorderStyle>,
    on_draw: Option<PaneCallback>,
    on_iterate: Option<PaneCallback>,
}

impl Pane {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            split: None,
            width: 0,
            height: 0,
            left: 0,
            top: 0,
            min_width: 0,
            min_height: 0,
            too_narrow: false,
            too_short: false,
            style: None,
            on_draw: None,
            on_iterate: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // -- Tree structure ------------------------------------------------------

    /// Split this pane into two fresh children and return them.
    ///
    /// Any existing children are dropped. The new children get their geometry
    /// on the next size change or [`Pane::relayout`].
    pub fn split(&mut self, kind: SplitKind, value: i32, unit: SplitUnit) -> (&mut Pane, &mut Pane) {
        let children = Box::new([
            Pane::new(format!("{}.0", self.name)),
            Pane::new(format!("{}.1", self.name)),
        ]);
        let split = self.split.insert(Split {
            kind,
            value,
            unit,
            children,
        });
        let [first, second] = &mut *split.children;
        (first, second)
    }

    /// Stack two children top/bottom
    pub fn split_horizontally(&mut self, value: i32, unit: SplitUnit) -> (&mut Pane, &mut Pane) {
        self.split(SplitKind::Horizontal, value, unit)
    }

    /// Place two children side by side
    pub fn split_vertically(&mut self, value: i32, unit: SplitUnit) -> (&mut Pane, &mut Pane) {
        self.split(SplitKind::Vertical, value, unit)
    }

    pub fn is_leaf(&self) -> bool {
        self.split.is_none()
    }

    pub fn split_info(&self) -> Option<&Split> {
        self.split.as_ref()
    }

    /// `None` for a leaf
    pub fn split_kind(&self) -> Option<SplitKind> {
        self.split.as_ref().map(|s| s.kind)
    }

    pub fn children(&self) -> Option<&[Pane; 2]> {
        self.split.as_ref().map(|s| &*s.children)
    }

    pub fn child(&self, index: usize) -> Option<&Pane> {
        self.split.as_ref().and_then(|s| s.children.get(index))
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Pane> {
        self.split.as_mut().and_then(|s| s.children.get_mut(index))
    }

    /// Names of all leaves, first child before second
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match &self.split {
            None => out.push(&self.name),
            Some(split) => {
                for child in split.children.iter() {
                    child.collect_leaves(out);
                }
            }
        }
    }

    // -- Configuration -------------------------------------------------------

    pub fn style(&self) -> Option<&BorderStyle> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, style: Option<BorderStyle>) {
        self.style = style;
    }

    pub fn min_width(&self) -> usize {
        self.min_width
    }

    pub fn min_height(&self) -> usize {
        self.min_height
    }

    pub fn set_min_width(&mut self, width: usize) {
        self.min_width = width;
    }

    pub fn set_min_height(&mut self, height: usize) {
        self.min_height = height;
    }

    /// Minimum width including the columns taken by the border
    pub fn total_min_width(&self) -> usize {
        self.min_width + self.style.as_ref().map_or(0, |s| s.horizontal_thickness())
    }

    /// Minimum height including the rows taken by the border
    pub fn total_min_height(&self) -> usize {
        self.min_height + self.style.as_ref().map_or(0, |s| s.vertical_thickness())
    }

    pub fn set_on_draw(&mut self, callback: impl FnMut(&Pane, &mut dyn CursorWriter) + 'static) {
        self.on_draw = Some(Box::new(callback));
    }

    pub fn set_on_iterate(&mut self, callback: impl FnMut(&Pane, &mut dyn CursorWriter) + 'static) {
        self.on_iterate = Some(Box::new(callback));
    }

    pub fn has_on_draw(&self) -> bool {
        self.on_draw.is_some()
    }

    pub fn has_on_iterate(&self) -> bool {
        self.on_iterate.is_some()
    }

    // -- Geometry ------------------------------------------------------------

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Width left for content once the border is drawn
    pub fn inner_width(&self) -> usize {
        let border = self.style.as_ref().map_or(0, |s| s.horizontal_thickness());
        self.width.saturating_sub(border)
    }

    /// Height left for content once the border is drawn
    pub fn inner_height(&self) -> usize {
        let border = self.style.as_ref().map_or(0, |s| s.vertical_thickness());
        self.height.saturating_sub(border)
    }

    pub fn is_too_small(&self) -> bool {
        self.too_narrow || self.too_short
    }

    pub fn set_left(&mut self, left: usize) {
        self.left = left;
    }

    pub fn set_top(&mut self, top: usize) {
        self.top = top;
    }

    /// Set the width and recompute the horizontal geometry of every descendant
    pub fn set_width(&mut self, width: usize) {
        self.resize(Axis::Width, width);
    }

    /// Set the height and recompute the vertical geometry of every descendant
    pub fn set_height(&mut self, height: usize) {
        self.resize(Axis::Height, height);
    }

    /// Reapply the current size, e.g. after splitting an already sized pane
    pub fn relayout(&mut self) {
        self.set_width(self.width);
        self.set_height(self.height);
    }

    /// Child sizes along the split axis for the current geometry.
    ///
    /// `None` for a leaf or when the split cannot give both children a cell.
    pub fn split_values(&self) -> Option<(usize, usize)> {
        let split = self.split.as_ref()?;
        let axis_size = match split.kind {
            SplitKind::Vertical => self.width,
            SplitKind::Horizontal => self.height,
        };
        split_values(split.value, split.unit, axis_size)
    }

    fn resize(&mut self, axis: Axis, size: usize) {
        let total_min = match axis {
            Axis::Width => {
                self.width = size;
                self.total_min_width()
            }
            Axis::Height => {
                self.height = size;
                self.total_min_height()
            }
        };
        let (origin, too_small) = match axis {
            Axis::Width => (self.left, &mut self.too_narrow),
            Axis::Height => (self.top, &mut self.too_short),
        };

        if total_min > 0 && size < total_min {
            *too_small = true;
            tracing::debug!("Pane {} too small: {:?} {} < {}", self.name, axis, size, total_min);
            return;
        }
        *too_small = false;

        let Some(split) = self.split.as_mut() else {
            return;
        };

        if !split.divides(axis) {
            for child in split.children.iter_mut() {
                child.place(axis, origin, size);
            }
            return;
        }

        match split_values(split.value, split.unit, size) {
            Some((first, second)) => {
                let [a, b] = &mut *split.children;
                a.place(axis, origin, first);
                b.place(axis, origin + first, second);
            }
            None => {
                *too_small = true;
                tracing::debug!(
                    "Pane {} too small to split: {:?} {} by {}",
                    self.name,
                    axis,
                    size,
                    split.value
                );
            }
        }
    }

    fn place(&mut self, axis: Axis, origin: usize, size: usize) {
        match axis {
            Axis::Width => {
                self.set_left(origin);
                self.set_width(size);
            }
            Axis::Height => {
                self.set_top(origin);
                self.set_height(size);
            }
        }
    }

    // -- Output --------------------------------------------------------------

    /// Write `text` at pane-local (`x`, `y`).
    ///
    /// Coordinates are shifted past the border unless `overwrite_style_frame`
    /// is set. Does nothing on a split pane that is not too small, since its
    /// area belongs to its children.
    pub fn write(&self, out: &mut dyn CursorWriter, x: usize, y: usize, text: &str, overwrite_style_frame: bool) {
        if self.split.is_some() && !self.is_too_small() {
            return;
        }
        let (inset_left, inset_top) = match (&self.style, overwrite_style_frame) {
            (Some(style), false) => (style.left_thickness(), style.top_thickness()),
            _ => (0, 0),
        };
        out.write(self.left + x + inset_left, self.top + y + inset_top, text);
    }

    /// Render the tree: borders and draw callbacks of every leaf
    pub fn draw(&mut self, out: &mut dyn CursorWriter) {
        if self.draw_too_small(out) {
            return;
        }
        if let Some(split) = self.split.as_mut() {
            for child in split.children.iter_mut() {
                child.draw(out);
            }
            return;
        }
        if let Some(style) = &self.style {
            border::render(style, self, out);
        }
        if let Some(mut callback) = self.on_draw.take() {
            callback(self, out);
            self.on_draw = Some(callback);
        }
    }

    /// Run the iterate callback of every leaf
    pub fn iterate(&mut self, out: &mut dyn CursorWriter) {
        if self.draw_too_small(out) {
            return;
        }
        if let Some(split) = self.split.as_mut() {
            for child in split.children.iter_mut() {
                child.iterate(out);
            }
            return;
        }
        if let Some(mut callback) = self.on_iterate.take() {
            callback(self, out);
            self.on_iterate = Some(callback);
        }
    }

    /// Writes the marker if the pane is too small; true when traversal must stop here
    fn draw_too_small(&self, out: &mut dyn CursorWriter) -> bool {
        if !self.is_too_small() {
            return false;
        }
        if self.width > 0 && self.height > 0 {
            self.write(out, 0, 0, TOO_SMALL_MARKER, false);
        }
        true
    }
}

impl fmt::Debug for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pane")
            .field("name", &self.name)
            .field("split", &self.split)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("top", &self.top)
            .field("min_width", &self.min_width)
            .field("min_height", &self.min_height)
            .field("too_small", &self.is_too_small())
            .field("style", &self.style)
            .field("on_draw", &self.on_draw.is_some())
            .field("on_iterate", &self.on_iterate.is_some())
            .finish()
    }
}
