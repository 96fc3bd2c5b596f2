use clap::ValueEnum;
use rand::seq::index;
use rand::Rng;

use crate::error::Result;
use crate::graph::{Weight, WeightedGraph};

/// An in-memory problem: the edge list of a tree and its machines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub edges: Vec<(usize, usize, Weight)>,
    pub machines: Vec<usize>,
    /// Number of nodes, including any that no edge touches.
    pub order: usize,
}

impl Instance {
    /// The graph over `0..order` with every edge connected.
    pub fn graph(&self) -> Result<WeightedGraph> {
        let mut graph = WeightedGraph::new(self.order);
        for &(u, v, weight) in &self.edges {
            graph.connect(u, v, weight)?;
        }
        Ok(graph)
    }
}

/// Small hand-made trees with known answers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    /// 4-2-1-0 with a leaf 3 hanging off 1, machines 2, 4, 0 (cost 10)
    Branching,
    /// Node 1 joined to 0, 2, 3 and 0 joined to 4, machines 2, 3, 4 (cost 5)
    Star,
    /// The path 4-1-3-0-2, machines 1, 3, 4 (cost 8)
    Line,
}

impl Sample {
    pub fn instance(self) -> Instance {
        let (edges, machines) = match self {
            Sample::Branching => (vec![(2, 1, 8), (1, 0, 5), (2, 4, 5), (1, 3, 4)], vec![2, 4, 0]),
            Sample::Star => (vec![(0, 1, 4), (1, 2, 3), (1, 3, 7), (0, 4, 2)], vec![2, 3, 4]),
            Sample::Line => (vec![(0, 3, 3), (1, 4, 4), (1, 3, 4), (0, 2, 5)], vec![1, 3, 4]),
        };
        Instance {
            edges,
            machines,
            order: 5,
        }
    }
}

/// Random labelled tree: node `i > 0` hangs off a uniformly chosen earlier
/// node. Weights are uniform in `1..=max_weight` and the machines are a
/// uniform subset of at most `machines` nodes, in random order.
pub fn random_tree<R>(nodes: usize, machines: usize, max_weight: Weight, rng: &mut R) -> Instance
where
    R: Rng + ?Sized,
{
    let max_weight = max_weight.max(1);
    let edges = (1..nodes)
        .map(|node| (node, rng.gen_range(0..node), rng.gen_range(1..=max_weight)))
        .collect();
    let machines = index::sample(rng, nodes, machines.min(nodes)).into_vec();
    Instance {
        edges,
        machines,
        order: nodes,
    }
}
