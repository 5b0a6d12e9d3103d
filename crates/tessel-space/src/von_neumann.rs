//! 4-connected neighbourhood (N/S/W/E).

use crate::edge::EdgeBehavior;
use crate::pattern::NeighborhoodPattern;

/// The 4 cardinal offsets: N, S, W, E.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Von Neumann neighbourhood: the four cells sharing an edge.
///
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Bounded**: corners have 2 neighbours, edges have 3
/// - **Wrap**: periodic boundary (torus topology), always 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VonNeumann {
    edge: EdgeBehavior,
}

impl VonNeumann {
    /// Create a 4-connected pattern with the given edge behavior.
    pub fn new(edge: EdgeBehavior) -> Self {
        Self { edge }
    }
}

impl NeighborhoodPattern for VonNeumann {
    fn name(&self) -> &str {
        "VonNeumann"
    }

    fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn offsets(&self) -> &[(i32, i32)] {
        &OFFSETS_4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use tessel_core::{GridDims, Position};

    fn p(r: u32, c: u32) -> Position {
        Position::new(r, c)
    }

    #[test]
    fn bounded_interior() {
        let v = VonNeumann::new(EdgeBehavior::Bounded);
        let n = v.neighbours(GridDims::new(5, 5), p(2, 2));
        assert_eq!(n.as_slice(), &[p(1, 2), p(3, 2), p(2, 1), p(2, 3)]);
    }

    #[test]
    fn bounded_corner_has_two() {
        let v = VonNeumann::new(EdgeBehavior::Bounded);
        let n = v.neighbours(GridDims::new(5, 5), p(4, 4));
        assert_eq!(n.len(), 2);
        assert!(n.contains(&p(3, 4)));
        assert!(n.contains(&p(4, 3)));
    }

    #[test]
    fn bounded_edge_has_three() {
        let v = VonNeumann::new(EdgeBehavior::Bounded);
        assert_eq!(v.neighbours(GridDims::new(5, 5), p(0, 2)).len(), 3);
    }

    #[test]
    fn wrap_corner_reaches_far_side() {
        let v = VonNeumann::new(EdgeBehavior::Wrap);
        let n = v.neighbours(GridDims::new(4, 6), p(0, 0));
        assert_eq!(n.as_slice(), &[p(3, 0), p(1, 0), p(0, 5), p(0, 1)]);
    }

    #[test]
    fn diagonals_excluded() {
        let v = VonNeumann::new(EdgeBehavior::Bounded);
        let n = v.neighbours(GridDims::new(3, 3), p(1, 1));
        assert!(!n.contains(&p(0, 0)));
        assert!(!n.contains(&p(2, 2)));
    }

    #[test]
    fn compliance_bounded() {
        compliance::run_full_compliance(
            &VonNeumann::new(EdgeBehavior::Bounded),
            GridDims::new(5, 8),
        );
    }

    #[test]
    fn compliance_wrap() {
        compliance::run_full_compliance(&VonNeumann::new(EdgeBehavior::Wrap), GridDims::new(5, 8));
    }
}
