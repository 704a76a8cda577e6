// ABOUTME: Pane layout management for terminal surfaces.
// ABOUTME: Binary pane tree, split geometry, border rendering and draw traversal.

pub mod border;
mod pane;
mod split;
mod surface;

pub use pane::{Pane, PaneCallback, Split, TOO_SMALL_MARKER};
pub use split::split_values;
pub use surface::{Surface, SurfaceHook, SurfaceInfo};
