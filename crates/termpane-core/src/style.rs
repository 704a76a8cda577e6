// ABOUTME: Border styles drawn around leaf panes.
// ABOUTME: Derives side presence and the thickness a frame takes from a pane.

use serde::{Deserialize, Serialize};

/// The eight glyphs of a border, each optional (an empty string means absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderGlyphs {
    pub north_west: String,
    pub north: String,
    pub north_east: String,
    pub east: String,
    pub south_east: String,
    pub south: String,
    pub south_west: String,
    pub west: String,
}

/// An immutable frame or margin around a pane.
///
/// A side is present when its edge glyph or either of its two corner glyphs
/// is non-empty. Each present side consumes one cell of the pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderStyle {
    glyphs: BorderGlyphs,
}

impl BorderStyle {
    pub fn new(glyphs: BorderGlyphs) -> Self {
        Self { glyphs }
    }

    /// Single-line box drawing frame
    pub fn frame() -> Self {
        Self::from_parts("┌", "┐", "┘", "└", "─", "│")
    }

    /// One blank cell on every side
    pub fn margin() -> Self {
        Self::from_parts(" ", " ", " ", " ", " ", " ")
    }

    fn from_parts(nw: &str, ne: &str, se: &str, sw: &str, horizontal: &str, vertical: &str) -> Self {
        Self::new(BorderGlyphs {
            north_west: nw.to_string(),
            north: horizontal.to_string(),
            north_east: ne.to_string(),
            east: vertical.to_string(),
            south_east: se.to_string(),
            south: horizontal.to_string(),
            south_west: sw.to_string(),
            west: vertical.to_string(),
        })
    }

    pub fn glyphs(&self) -> &BorderGlyphs {
        &self.glyphs
    }

    pub fn is_left_present(&self) -> bool {
        let g = &self.glyphs;
        any_present(&[&g.north_west, &g.west, &g.south_west])
    }

    pub fn is_right_present(&self) -> bool {
        let g = &self.glyphs;
        any_present(&[&g.north_east, &g.east, &g.south_east])
    }

    pub fn is_top_present(&self) -> bool {
        let g = &self.glyphs;
        any_present(&[&g.north_west, &g.north, &g.north_east])
    }

    pub fn is_bottom_present(&self) -> bool {
        let g = &self.glyphs;
        any_present(&[&g.south_west, &g.south, &g.south_east])
    }

    /// Cells taken from the left edge (0 or 1)
    pub fn left_thickness(&self) -> usize {
        usize::from(self.is_left_present())
    }

    /// Cells taken from the top edge (0 or 1)
    pub fn top_thickness(&self) -> usize {
        usize::from(self.is_top_present())
    }

    /// Columns consumed by the left and right sides together
    pub fn horizontal_thickness(&self) -> usize {
        self.left_thickness() + usize::from(self.is_right_present())
    }

    /// Rows consumed by the top and bottom sides together
    pub fn vertical_thickness(&self) -> usize {
        self.top_thickness() + usize::from(self.is_bottom_present())
    }
}

impl From<BorderGlyphs> for BorderStyle {
    fn from(glyphs: BorderGlyphs) -> Self {
        Self::new(glyphs)
    }
}

fn any_present(glyphs: &[&String]) -> bool {
    glyphs.iter().any(|g| !g.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_all_sides() {
        let style = BorderStyle::frame();
        assert!(style.is_left_present());
        assert!(style.is_right_present());
        assert!(style.is_top_present());
        assert!(style.is_bottom_present());
        assert_eq!(style.horizontal_thickness(), 2);
        assert_eq!(style.vertical_thickness(), 2);
        assert_eq!(style.glyphs().north_east, "┐");
        assert_eq!(style.glyphs().south_west, "└");
    }

    #[test]
    fn margin_is_blank_but_present() {
        let style = BorderStyle::margin();
        assert_eq!(style.glyphs().north, " ");
        assert_eq!(style.horizontal_thickness(), 2);
        assert_eq!(style.vertical_thickness(), 2);
    }

    #[test]
    fn empty_style_takes_no_space() {
        let style = BorderStyle::new(BorderGlyphs::default());
        assert!(!style.is_left_present());
        assert_eq!(style.horizontal_thickness(), 0);
        assert_eq!(style.vertical_thickness(), 0);
    }

    #[test]
    fn corner_alone_makes_two_sides_present() {
        let style = BorderStyle::new(BorderGlyphs {
            north_west: "+".to_string(),
            ..Default::default()
        });
        assert!(style.is_left_present());
        assert!(style.is_top_present());
        assert!(!style.is_right_present());
        assert!(!style.is_bottom_present());
        assert_eq!(style.horizontal_thickness(), 1);
        assert_eq!(style.vertical_thickness(), 1);
    }

    #[test]
    fn bottom_edge_only() {
        let style = BorderStyle::new(BorderGlyphs {
            south: "_".to_string(),
            ..Default::default()
        });
        assert_eq!(style.horizontal_thickness(), 0);
        assert_eq!(style.vertical_thickness(), 1);
        assert_eq!(style.top_thickness(), 0);
    }
}
