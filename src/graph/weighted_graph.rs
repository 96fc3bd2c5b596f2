use petgraph::graphmap::UnGraphMap;
use petgraph::unionfind::UnionFind;

use crate::error::{Error, Result};
use crate::graph::Weight;

/// Undirected weighted graph over the dense node range `0..order`.
///
/// Every edge is stored once in a `GraphMap`, which keeps both adjacency
/// records of an edge in sync: removing `(u, v)` also removes `(v, u)`.
#[derive(Clone, Debug)]
pub struct WeightedGraph {
    order: usize,
    pub(super) adjacency: UnGraphMap<usize, Weight>,
}

impl WeightedGraph {
    /// Create a graph with nodes `0..order` and no edges.
    pub fn new(order: usize) -> Self {
        let mut adjacency = UnGraphMap::with_capacity(order, order.saturating_sub(1));
        for node in 0..order {
            adjacency.add_node(node);
        }
        Self { order, adjacency }
    }

    /// Build a graph from `(u, v, weight)` triples. The order is one more than
    /// the largest endpoint.
    pub fn from_edges(edges: &[(usize, usize, Weight)]) -> Result<Self> {
        let order = edges
            .iter()
            .map(|&(u, v, _)| u.max(v) + 1)
            .max()
            .unwrap_or(0);
        let mut graph = Self::new(order);
        for &(u, v, weight) in edges {
            graph.connect(u, v, weight)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Fails with [`Error::InvalidNode`] unless `node` lies in `0..order`.
    pub fn check_node(&self, node: usize) -> Result<()> {
        if node < self.order {
            Ok(())
        } else {
            Err(Error::InvalidNode {
                node,
                order: self.order,
            })
        }
    }

    /// Add the edge `(u, v)` or overwrite its weight.
    pub fn connect(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(Error::SelfLoop { node: u });
        }
        if weight == 0 {
            return Err(Error::InvalidWeight { u, v, weight });
        }
        self.adjacency.add_edge(u, v, weight);
        Ok(())
    }

    /// Remove the edge `(u, v)` and return its weight.
    pub fn disconnect(&mut self, u: usize, v: usize) -> Result<Weight> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.adjacency
            .remove_edge(u, v)
            .ok_or(Error::EdgeNotFound { u, v })
    }

    pub fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.adjacency.edge_weight(u, v).copied()
    }

    #[inline]
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.contains_edge(u, v)
    }

    /// Neighbors of `node` with the weight of the connecting edge, in a deterministic order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.adjacency
            .edges(node)
            .map(|(_, neighbor, &weight)| (neighbor, weight))
    }

    /// All edges as `(u, v, weight)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.adjacency
            .all_edges()
            .map(|(u, v, &weight)| (u.min(v), u.max(v), weight))
    }

    /// Label every node with a representative of its connected component.
    pub fn components(&self) -> Vec<usize> {
        let mut union_find = UnionFind::new(self.order);
        for (u, v, _) in self.adjacency.all_edges() {
            union_find.union(u, v);
        }
        union_find.into_labeling()
    }
}
