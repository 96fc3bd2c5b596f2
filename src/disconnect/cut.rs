use std::fmt;

use crate::graph::Weight;

/// An edge chosen for removal, stored with the lower endpoint first so the
/// same physical edge compares equal no matter which path found it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CutEdge {
    pub u: usize,
    pub v: usize,
    pub weight: Weight,
}

impl CutEdge {
    pub fn new(u: usize, v: usize, weight: Weight) -> Self {
        Self {
            u: u.min(v),
            v: u.max(v),
            weight,
        }
    }
}

impl fmt::Display for CutEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) weight {}", self.u, self.v, self.weight)
    }
}

/// Outcome of separating a machine set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Disconnection {
    /// Sum of the weights of `cut_edges`.
    pub cost: Weight,
    /// Every removed edge, sorted.
    pub cut_edges: Vec<CutEdge>,
    /// Machine pairs that were already in different components when queried.
    pub separated_pairs: usize,
}

impl Disconnection {
    pub fn contains(&self, u: usize, v: usize) -> bool {
        let key = (u.min(v), u.max(v));
        self.cut_edges.iter().any(|edge| (edge.u, edge.v) == key)
    }
}
