// ABOUTME: Share computation for a pane split along one axis.
// ABOUTME: The sign of the split value picks which child gets the computed size.

use termpane_core::SplitUnit;

/// Sizes of the two children when `axis_size` cells are split by `value`.
///
/// A negative value pins the first child to the computed size, a positive one
/// pins the second. Returns `None` when either child would end up empty, which
/// includes a zero value and any value at or beyond the axis size.
pub fn split_values(value: i32, unit: SplitUnit, axis_size: usize) -> Option<(usize, usize)> {
    let magnitude = value.unsigned_abs();
    let calc = match unit {
        SplitUnit::Percent => {
            let share = u128::from(magnitude) * axis_size as u128 / 100;
            usize::try_from(share).unwrap_or(usize::MAX)
        }
        SplitUnit::Char => usize::try_from(magnitude).unwrap_or(usize::MAX),
    };

    if calc < 1 || calc >= axis_size {
        return None;
    }

    if value < 0 {
        Some((calc, axis_size - calc))
    } else {
        Some((axis_size - calc, calc))
    }
}
