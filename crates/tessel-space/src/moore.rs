//! 8-connected neighbourhood (cardinal + diagonal).

use crate::edge::EdgeBehavior;
use crate::pattern::NeighborhoodPattern;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Moore neighbourhood: the eight cells sharing an edge or corner.
///
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Bounded**: corners have 3 neighbours, edges have 5
/// - **Wrap**: periodic boundary (torus topology), always 8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moore {
    edge: EdgeBehavior,
}

impl Moore {
    /// Create an 8-connected pattern with the given edge behavior.
    pub fn new(edge: EdgeBehavior) -> Self {
        Self { edge }
    }
}

impl NeighborhoodPattern for Moore {
    fn name(&self) -> &str {
        "Moore"
    }

    fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn offsets(&self) -> &[(i32, i32)] {
        &OFFSETS_8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use tessel_core::{GridDims, Position};

    fn p(r: u32, c: u32) -> Position {
        Position::new(r, c)
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn bounded_3x3_center_has_eight() {
        let m = Moore::new(EdgeBehavior::Bounded);
        assert_eq!(m.neighbours(GridDims::new(3, 3), p(1, 1)).len(), 8);
    }

    #[test]
    fn bounded_3x3_corner_has_three() {
        let m = Moore::new(EdgeBehavior::Bounded);
        let n = m.neighbours(GridDims::new(3, 3), p(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&p(1, 0)));
        assert!(n.contains(&p(0, 1)));
        assert!(n.contains(&p(1, 1)));
    }

    #[test]
    fn bounded_edge_has_five() {
        let m = Moore::new(EdgeBehavior::Bounded);
        assert_eq!(m.neighbours(GridDims::new(5, 5), p(0, 2)).len(), 5);
    }

    #[test]
    fn wrap_corner() {
        let m = Moore::new(EdgeBehavior::Wrap);
        let n = m.neighbours(GridDims::new(5, 5), p(0, 0));
        assert_eq!(n.len(), 8);
        assert!(n.contains(&p(4, 4))); // NW wraps on both axes
        assert!(n.contains(&p(4, 0))); // N wraps
        assert!(n.contains(&p(0, 4))); // W wraps
    }

    #[test]
    fn order_follows_offset_table() {
        let m = Moore::new(EdgeBehavior::Bounded);
        let n = m.neighbours(GridDims::new(3, 3), p(1, 1));
        assert_eq!(n[0], p(0, 1));
        assert_eq!(n[1], p(2, 1));
        assert_eq!(n[7], p(2, 2));
    }

    // ── 1×1 edge case ──────────────────────────────────────────

    #[test]
    fn single_cell_bounded() {
        let m = Moore::new(EdgeBehavior::Bounded);
        assert!(m.neighbours(GridDims::new(1, 1), p(0, 0)).is_empty());
    }

    #[test]
    fn single_cell_wrap() {
        let m = Moore::new(EdgeBehavior::Wrap);
        let n = m.neighbours(GridDims::new(1, 1), p(0, 0));
        // All 8 directions wrap to self
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|nb| *nb == p(0, 0)));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_bounded() {
        compliance::run_full_compliance(&Moore::new(EdgeBehavior::Bounded), GridDims::new(6, 7));
    }

    #[test]
    fn compliance_wrap() {
        compliance::run_full_compliance(&Moore::new(EdgeBehavior::Wrap), GridDims::new(6, 7));
    }

    proptest! {
        #[test]
        fn bounded_degree_matches_geometry(rows in 1u32..12, cols in 1u32..12, r in 0u32..12, c in 0u32..12) {
            let dims = GridDims::new(rows, cols);
            let pos = p(r % rows, c % cols);
            let span = |v: u32, len: u32| -> usize {
                (v.saturating_sub(1)..=(v + 1).min(len - 1)).count()
            };
            let expected = span(pos.row, rows) * span(pos.col, cols) - 1;
            prop_assert_eq!(Moore::new(EdgeBehavior::Bounded).neighbours(dims, pos).len(), expected);
        }
    }
}
