//! Shared coordinate helpers for 2D patterns.

use smallvec::SmallVec;
use tessel_core::{GridDims, Position};

use crate::edge::EdgeBehavior;

/// Resolve a single axis value under the given edge behavior.
/// Returns `None` for a bounded out-of-range value.
pub(crate) fn resolve_axis(val: i64, len: u32, edge: EdgeBehavior) -> Option<u32> {
    let n = i64::from(len);
    if (0..n).contains(&val) {
        return Some(val as u32);
    }
    match edge {
        EdgeBehavior::Bounded => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n) as u32),
    }
}

/// Apply `offsets` to `pos`, resolving each against `dims` and `edge`.
/// Output order follows `offsets`.
pub(crate) fn apply_offsets(
    offsets: &[(i32, i32)],
    dims: GridDims,
    pos: Position,
    edge: EdgeBehavior,
) -> SmallVec<[Position; 8]> {
    let r = i64::from(pos.row);
    let c = i64::from(pos.col);
    offsets
        .iter()
        .filter_map(|&(dr, dc)| {
            let nr = resolve_axis(r + i64::from(dr), dims.rows, edge)?;
            let nc = resolve_axis(c + i64::from(dc), dims.cols, edge)?;
            Some(Position::new(nr, nc))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_drops_out_of_range() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Bounded), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Bounded), None);
        assert_eq!(resolve_axis(4, 5, EdgeBehavior::Bounded), Some(4));
    }

    #[test]
    fn wrap_is_modular() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), Some(0));
        assert_eq!(resolve_axis(-7, 5, EdgeBehavior::Wrap), Some(3));
    }
}
