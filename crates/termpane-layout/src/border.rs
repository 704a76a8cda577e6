// ABOUTME: Draws a border style around the edge cells of a leaf pane.
// ABOUTME: Corners first, then the top/bottom runs, then the left/right columns.

use termpane_core::BorderStyle;
use termpane_terminal::CursorWriter;

use crate::Pane;

/// Paint `style` on the outermost cells of `pane`.
///
/// Writes bypass the border inset so they land on the frame itself. Corners
/// are only drawn where both adjoining sides are present; edge runs exclude
/// the corner cells.
pub fn render(style: &BorderStyle, pane: &Pane, out: &mut dyn CursorWriter) {
    let (width, height) = (pane.width(), pane.height());
    if width == 0 || height == 0 {
        return;
    }

    let glyphs = style.glyphs();
    let left = style.is_left_present();
    let right = style.is_right_present();
    let top = style.is_top_present();
    let bottom = style.is_bottom_present();
    let (last_col, last_row) = (width - 1, height - 1);

    let mut put = |x: usize, y: usize, text: &str| {
        if !text.is_empty() {
            pane.write(&mut *out, x, y, text, true);
        }
    };

    if left && top {
        put(0, 0, &glyphs.north_west);
    }
    if left && bottom {
        put(0, last_row, &glyphs.south_west);
    }
    if right && top {
        put(last_col, 0, &glyphs.north_east);
    }
    if right && bottom {
        put(last_col, last_row, &glyphs.south_east);
    }

    let first_col = usize::from(left);
    let span = width.saturating_sub(usize::from(left) + usize::from(right));
    if top {
        put(first_col, 0, &glyphs.north.repeat(span));
    }
    if bottom {
        put(first_col, last_row, &glyphs.south.repeat(span));
    }

    let first_row = usize::from(top);
    let end_row = height.saturating_sub(usize::from(bottom));
    for row in first_row..end_row {
        if left {
            put(0, row, &glyphs.west);
        }
        if right {
            put(last_col, row, &glyphs.east);
        }
    }
}
