mod shortest_paths;
mod weighted_graph;

pub use shortest_paths::{Path, ShortestPaths};
pub use weighted_graph::WeightedGraph;

/// Edge weights and path lengths. Weights are strictly positive.
pub type Weight = u64;
