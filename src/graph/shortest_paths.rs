use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap};

use petgraph::visit::{VisitMap, Visitable};

use crate::error::Result;
use crate::graph::{Weight, WeightedGraph};

/// A shortest path, stored from the source to the target (both inclusive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<usize>,
    pub distance: Weight,
}

/// Paths from one source to every target the search reached.
///
/// Targets in other components are absent rather than marked with a sentinel.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: usize,
    paths: BTreeMap<usize, Path>,
    settled: usize,
}

impl ShortestPaths {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn path(&self, target: usize) -> Option<&Path> {
        self.paths.get(&target)
    }

    pub fn distance(&self, target: usize) -> Option<Weight> {
        self.paths.get(&target).map(|path| path.distance)
    }

    /// Reached targets in ascending order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.paths.values()
    }

    /// Number of nodes finalized before the search stopped, the source included.
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl WeightedGraph {
    /// Dijkstra from `source`, stopping once every target is settled or the
    /// queue runs dry. The source itself is ignored if it appears in `targets`.
    ///
    /// The queue is ordered by `(distance, node)` and a node is only relaxed
    /// for a strictly shorter distance, so equal-length paths resolve the same
    /// way on every run.
    pub fn shortest_paths(&self, source: usize, targets: &BTreeSet<usize>) -> Result<ShortestPaths> {
        self.check_node(source)?;
        for &target in targets {
            self.check_node(target)?;
        }

        let mut outstanding: BTreeSet<usize> =
            targets.iter().copied().filter(|&t| t != source).collect();
        let mut reached = vec![];
        let mut settled_count = 0;

        // scratch state lives for this query only
        let mut distances: HashMap<usize, Weight> = HashMap::new();
        let mut predecessors: HashMap<usize, usize> = HashMap::new();
        let mut settled = self.adjacency.visit_map();
        let mut queue: BinaryHeap<Reverse<(Weight, usize)>> = BinaryHeap::new();

        distances.insert(source, 0);
        queue.push(Reverse((0, source)));

        while !outstanding.is_empty() {
            let Some(Reverse((distance, node))) = queue.pop() else {
                break;
            };
            // stale queue entry of an already settled node
            if !settled.visit(node) {
                continue;
            }
            settled_count += 1;
            if outstanding.remove(&node) {
                reached.push(node);
            }

            for (_, next, &weight) in self.adjacency.edges(node) {
                if settled.is_visited(&next) {
                    continue;
                }
                let candidate = distance.saturating_add(weight);
                if distances.get(&next).is_some_and(|&known| known <= candidate) {
                    continue;
                }
                distances.insert(next, candidate);
                predecessors.insert(next, node);
                queue.push(Reverse((candidate, next)));
            }
        }

        let paths = reached
            .into_iter()
            .map(|target| {
                let mut vertices = vec![target];
                let mut vertex = target;
                while let Some(&previous) = predecessors.get(&vertex) {
                    vertices.push(previous);
                    vertex = previous;
                }
                vertices.reverse();
                let path = Path {
                    vertices,
                    distance: distances[&target],
                };
                (target, path)
            })
            .collect();

        Ok(ShortestPaths {
            source,
            paths,
            settled: settled_count,
        })
    }
}
