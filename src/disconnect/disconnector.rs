use std::collections::BTreeSet;

use itertools::Itertools;
use log::{debug, info, trace};

use crate::disconnect::{CutEdge, Disconnection};
use crate::error::{Error, Result};
use crate::graph::{Path, Weight, WeightedGraph};

/// Minimum total weight of edges to remove so that no two machines stay connected.
///
/// Fewer than two machines cost nothing and the edge list is not inspected.
pub fn minimum_disconnect_cost(edges: &[(usize, usize, Weight)], machines: &[usize]) -> Result<Weight> {
    if machines.len() < 2 {
        return Ok(0);
    }
    Ok(disconnect_machines(edges, machines)?.cost)
}

/// Like [`minimum_disconnect_cost`], but reports which edges were cut.
pub fn disconnect_machines(edges: &[(usize, usize, Weight)], machines: &[usize]) -> Result<Disconnection> {
    if machines.len() < 2 {
        return Ok(Disconnection::default());
    }
    let graph = WeightedGraph::from_edges(edges)?;
    Disconnector::new(graph, machines)?.run()
}

/// Separates machines one at a time, mutating its graph as cuts are committed.
#[derive(Debug)]
pub struct Disconnector {
    graph: WeightedGraph,
    machines: Vec<usize>,
}

impl Disconnector {
    pub fn new(graph: WeightedGraph, machines: &[usize]) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for &machine in machines {
            graph.check_node(machine)?;
            if !seen.insert(machine) {
                return Err(Error::DuplicateMachine { node: machine });
            }
        }
        Ok(Self {
            graph,
            machines: machines.to_vec(),
        })
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Separate the machines and return the report.
    pub fn run(self) -> Result<Disconnection> {
        self.finish().map(|(disconnection, _)| disconnection)
    }

    /// Separate the machines and return the report together with the cut graph.
    ///
    /// For each machine in input order, cut the cheapest edge on the shortest
    /// path to every later machine it still reaches. Cuts are committed before
    /// the next machine is queried.
    pub fn finish(mut self) -> Result<(Disconnection, WeightedGraph)> {
        let mut disconnection = Disconnection::default();
        let mut remaining: BTreeSet<usize> = self.machines.iter().copied().collect();

        for &machine in &self.machines {
            remaining.remove(&machine);
            if remaining.is_empty() {
                break;
            }

            let paths = self.graph.shortest_paths(machine, &remaining)?;
            debug!(
                "machine {}: reaches {} of {} remaining machines, {} nodes settled",
                machine,
                paths.len(),
                remaining.len(),
                paths.settled_count()
            );
            disconnection.separated_pairs += remaining.len() - paths.len();

            let mut cuts = BTreeSet::new();
            for path in paths.paths() {
                if let Some(edge) = cheapest_edge(&self.graph, path)? {
                    trace!("path {:?} is cheapest to cut at {}", path.vertices, edge);
                    cuts.insert(edge);
                }
            }

            for edge in cuts {
                self.graph.disconnect(edge.u, edge.v)?;
                trace!("cut {}", edge);
                disconnection.cost += edge.weight;
                disconnection.cut_edges.push(edge);
            }
        }

        disconnection.cut_edges.sort();
        info!(
            "separated {} machines with {} cuts, total cost {}",
            self.machines.len(),
            disconnection.cut_edges.len(),
            disconnection.cost
        );
        Ok((disconnection, self.graph))
    }
}

/// The first lightest edge along `path`, or `None` for a single-vertex path.
fn cheapest_edge(graph: &WeightedGraph, path: &Path) -> Result<Option<CutEdge>> {
    let edges = path
        .vertices
        .iter()
        .copied()
        .tuple_windows()
        .map(|(u, v)| {
            graph
                .weight(u, v)
                .map(|weight| CutEdge::new(u, v, weight))
                .ok_or(Error::EdgeNotFound { u, v })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(edges.into_iter().min_by_key(|edge| edge.weight))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use crate::disconnect::{
        disconnect_machines, minimum_disconnect_cost, CutEdge, Disconnection, Disconnector,
    };
    use crate::error::Error;
    use crate::graph::{Weight, WeightedGraph};
    use crate::instance::{random_tree, Instance, Sample};

    /// True if every machine sits in its own component once `removed` is taken out.
    fn separates(edges: &[(usize, usize, Weight)], machines: &[usize], removed: &[(usize, usize)]) -> bool {
        let mut graph = WeightedGraph::from_edges(edges).unwrap();
        for &(u, v) in removed {
            graph.disconnect(u, v).unwrap();
        }
        let labels = graph.components();
        let mut seen = machines.iter().map(|&m| labels[m]).collect::<Vec<_>>();
        seen.sort();
        seen.dedup();
        seen.len() == machines.len()
    }

    /// Cheapest multiway cut found by trying every subset of edges.
    fn brute_force_cost(edges: &[(usize, usize, Weight)], machines: &[usize]) -> Weight {
        let mut best = Weight::MAX;
        for mask in 0u32..(1 << edges.len()) {
            let removed = edges
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, &(u, v, _))| (u, v))
                .collect::<Vec<_>>();
            let cost: Weight = edges
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, &(_, _, w))| w)
                .sum();
            if cost < best && separates(edges, machines, &removed) {
                best = cost;
            }
        }
        best
    }

    #[test]
    fn branching_sample() {
        let Instance { edges, machines, .. } = Sample::Branching.instance();
        let disconnection = disconnect_machines(&edges, &machines).unwrap();

        assert_eq!(disconnection.cost, 10);
        assert_eq!(
            disconnection.cut_edges,
            vec![CutEdge::new(0, 1, 5), CutEdge::new(2, 4, 5)]
        );
        assert_eq!(brute_force_cost(&edges, &machines), 10);
    }

    #[test]
    fn star_sample() {
        let Instance { edges, machines, .. } = Sample::Star.instance();
        let disconnection = disconnect_machines(&edges, &machines).unwrap();

        assert_eq!(disconnection.cost, 5);
        assert_eq!(
            disconnection.cut_edges,
            vec![CutEdge::new(0, 4, 2), CutEdge::new(1, 2, 3)]
        );
        // machine 3 no longer reaches machine 4 when its turn comes
        assert_eq!(disconnection.separated_pairs, 1);
        assert_eq!(brute_force_cost(&edges, &machines), 5);
    }

    #[test]
    fn line_sample() {
        let Instance { edges, machines, .. } = Sample::Line.instance();
        assert_eq!(minimum_disconnect_cost(&edges, &machines), Ok(8));
        assert_eq!(brute_force_cost(&edges, &machines), 8);
    }

    #[test]
    fn fewer_than_two_machines_cost_nothing() {
        let Instance { edges, .. } = Sample::Branching.instance();
        assert_eq!(minimum_disconnect_cost(&edges, &[]), Ok(0));
        assert_eq!(minimum_disconnect_cost(&edges, &[2]), Ok(0));
        // not even validated
        assert_eq!(minimum_disconnect_cost(&edges, &[5]), Ok(0));
        assert_eq!(minimum_disconnect_cost(&[], &[5]), Ok(0));
    }

    #[test]
    fn every_entry_point_skips_fewer_than_two_machines() {
        assert_eq!(disconnect_machines(&[], &[0]), Ok(Disconnection::default()));
        assert_eq!(disconnect_machines(&[(0, 1, 2)], &[3]), Ok(Disconnection::default()));
        assert_eq!(disconnect_machines(&[(0, 1, 2)], &[]), Ok(Disconnection::default()));

        let mut rng = StdRng::seed_from_u64(5);
        let Instance { edges, machines, order } = random_tree(1, 1, 9, &mut rng);
        assert_eq!(order, 1);
        assert_eq!(machines, vec![0]);
        assert_eq!(minimum_disconnect_cost(&edges, &machines), Ok(0));
        assert_eq!(disconnect_machines(&edges, &machines).unwrap().cost, 0);

        // an explicit node count keeps isolated nodes addressable
        let graph = WeightedGraph::new(order);
        let disconnection = Disconnector::new(graph, &machines).unwrap().run().unwrap();
        assert_eq!(disconnection, Disconnection::default());
    }

    #[test]
    fn shared_cheapest_edge_is_cut_once() {
        // both paths out of machine 0 are cheapest at (0, 1)
        let edges = [(0, 1, 1), (1, 2, 5), (1, 3, 5)];
        let disconnection = disconnect_machines(&edges, &[0, 2, 3]).unwrap();

        assert_eq!(disconnection.cost, 6);
        assert_eq!(
            disconnection.cut_edges,
            vec![CutEdge::new(0, 1, 1), CutEdge::new(1, 2, 5)]
        );
        assert_eq!(disconnection.separated_pairs, 0);
    }

    #[test]
    fn graph_reflects_committed_cuts() {
        let Instance { edges, machines, .. } = Sample::Branching.instance();
        let graph = WeightedGraph::from_edges(&edges).unwrap();
        let (disconnection, mut graph) = Disconnector::new(graph, &machines)
            .unwrap()
            .finish()
            .unwrap();

        assert_eq!(disconnection.cost, 10);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.contains_edge(0, 1));
        assert!(!graph.contains_edge(2, 4));
        assert_eq!(graph.disconnect(2, 4), Err(Error::EdgeNotFound { u: 2, v: 4 }));
    }

    #[test]
    fn invalid_machines_are_rejected() {
        let Instance { edges, .. } = Sample::Branching.instance();
        assert_eq!(
            minimum_disconnect_cost(&edges, &[0, 9]),
            Err(Error::InvalidNode { node: 9, order: 5 })
        );
        assert_eq!(
            minimum_disconnect_cost(&edges, &[0, 2, 0]),
            Err(Error::DuplicateMachine { node: 0 })
        );
    }

    #[test]
    fn invalid_edges_are_rejected() {
        assert_eq!(
            minimum_disconnect_cost(&[(0, 1, 3), (1, 2, 0)], &[0, 2]),
            Err(Error::InvalidWeight { u: 1, v: 2, weight: 0 })
        );
        assert_eq!(
            minimum_disconnect_cost(&[(0, 1, 3), (1, 1, 2)], &[0, 1]),
            Err(Error::SelfLoop { node: 1 })
        );
    }

    #[test]
    fn matches_brute_force_on_random_trees() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            let Instance { edges, machines, .. } = random_tree(8, 4, 9, &mut rng);
            assert_eq!(
                minimum_disconnect_cost(&edges, &machines).unwrap(),
                brute_force_cost(&edges, &machines),
                "edges {edges:?}, machines {machines:?}"
            );
        }
    }

    #[test]
    fn machine_order_does_not_change_cost() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let Instance { edges, mut machines, .. } = random_tree(30, 8, 20, &mut rng);
            let cost = minimum_disconnect_cost(&edges, &machines).unwrap();
            for _ in 0..5 {
                machines.shuffle(&mut rng);
                assert_eq!(minimum_disconnect_cost(&edges, &machines).unwrap(), cost);
            }
        }
    }

    #[test]
    fn cut_set_separates_and_is_minimal() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let Instance { edges, machines, .. } = random_tree(20, 6, 10, &mut rng);
            let disconnection = disconnect_machines(&edges, &machines).unwrap();
            let removed = disconnection
                .cut_edges
                .iter()
                .map(|edge| (edge.u, edge.v))
                .collect::<Vec<_>>();

            assert!(separates(&edges, &machines, &removed));
            assert_eq!(
                disconnection.cost,
                disconnection.cut_edges.iter().map(|edge| edge.weight).sum::<Weight>()
            );

            // putting back any single edge reconnects some pair
            for skipped in 0..removed.len() {
                let mut subset = removed.clone();
                subset.remove(skipped);
                assert!(!separates(&edges, &machines, &subset));
            }
        }
    }
}
