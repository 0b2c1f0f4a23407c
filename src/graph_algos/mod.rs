pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use shortest_path::shortest_path;

use crate::errors::SearchError;

use indexmap::IndexMap;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fmt::Debug,
    hash::{BuildHasher, Hash},
};


/// Read-only adjacency list: node -> ordered (neighbor, weight) arcs
/// Weights must be non-negative, each stored arc is treated on its own
pub trait Adjacency<N, C> {
    /// True if the node is registered as a key, even without arcs
    fn contains_node(&self, node: &N) -> bool;

    /// Outgoing arcs of a node, empty for unknown nodes
    fn arcs(&self, node: &N) -> &[(N, C)];

    fn node_count(&self) -> usize;
}

impl<N, C, S> Adjacency<N, C> for HashMap<N, Vec<(N, C)>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn arcs(&self, node: &N) -> &[(N, C)] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

impl<N, C, S> Adjacency<N, C> for IndexMap<N, Vec<(N, C)>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn arcs(&self, node: &N) -> &[(N, C)] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

/// Projected (x, y) position per node, feeds the A* heuristic
pub trait Coordinates<N, C> {
    fn position(&self, node: &N) -> Option<(C, C)>;
}

impl<N, C, S> Coordinates<N, C> for HashMap<N, (C, C), S>
where
    N: Eq + Hash,
    C: Copy,
    S: BuildHasher,
{
    fn position(&self, node: &N) -> Option<(C, C)> {
        self.get(node).copied()
    }
}

impl<N, C, S> Coordinates<N, C> for IndexMap<N, (C, C), S>
where
    N: Eq + Hash,
    C: Copy,
    S: BuildHasher,
{
    fn position(&self, node: &N) -> Option<(C, C)> {
        self.get(node).copied()
    }
}


/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Reached, // target finalized, path is optimal
    Unreachable, // frontier exhausted first
    InvalidEndpoint, // source or target unknown, no work done
    Interrupted, // stop predicate fired
}

/// Path from source to target (inclusive) and the number of finalized nodes
/// `path` is empty unless `outcome` is `Reached`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<N, C> {
    pub path: Vec<N>,
    pub visited: usize,
    pub cost: Option<C>,
    pub outcome: SearchOutcome,
}

impl<N, C> SearchResult<N, C> {
    pub(crate) fn invalid_endpoint() -> Self {
        Self::unfinished(0, SearchOutcome::InvalidEndpoint)
    }

    pub(crate) fn unfinished(visited: usize, outcome: SearchOutcome) -> Self {
        Self {
            path: Vec::new(),
            visited,
            cost: None,
            outcome,
        }
    }

    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Reached
    }
}

/// Rejects negative and NaN weights at the relaxation boundary
pub(crate) fn check_weight<C: Float + Debug>(weight: C) -> Result<C, SearchError> {
    if weight >= C::zero() {
        Ok(weight)
    } else {
        Err(SearchError::InvalidWeight(format!("{weight:?}")))
    }
}

/// Length of a path following the cheapest arc between consecutive nodes
/// None if two consecutive nodes are not joined by an arc
pub(crate) fn path_cost<N, C, G>(graph: &G, path: &[N]) -> Option<C>
where
    N: Eq,
    C: Float,
    G: Adjacency<N, C>,
{
    path.windows(2).try_fold(C::zero(), |total, pair| {
        graph
            .arcs(&pair[0])
            .iter()
            .filter(|(neighbor, _)| *neighbor == pair[1])
            .map(|&(_, weight)| weight)
            .reduce(C::min)
            .map(|weight| total + weight)
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::a_star::a_star;
    use super::dijkstra::dijkstra;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    type Graph = HashMap<usize, Vec<(usize, f64)>>;
    type Coords = HashMap<usize, (f64, f64)>;

    // Random geometric graph: every arc is at least as long as the straight
    // line between its endpoints, so the Euclidean heuristic is consistent
    fn random_road_graph(seed: u64, nodes: usize, density: f64) -> (Graph, Coords) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph: Graph = HashMap::new();
        let mut coords: Coords = HashMap::new();

        for node in 0..nodes {
            coords.insert(node, (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)));
            graph.insert(node, Vec::new());
        }

        for a in 0..nodes {
            for b in (a + 1)..nodes {
                if !rng.random_bool(density) {
                    continue;
                }
                let (ax, ay) = coords[&a];
                let (bx, by) = coords[&b];
                let length = crate::geometry::euclidean(ax, ay, bx, by) * rng.random_range(1.0..1.5);
                graph.get_mut(&a).unwrap().push((b, length));
                graph.get_mut(&b).unwrap().push((a, length));
            }
        }

        (graph, coords)
    }

    // All-pairs reference costs
    fn floyd_warshall(graph: &Graph, nodes: usize) -> Vec<Vec<f64>> {
        let mut dist = vec![vec![f64::INFINITY; nodes]; nodes];
        for node in 0..nodes {
            dist[node][node] = 0.0;
            for &(neighbor, weight) in &graph[&node] {
                dist[node][neighbor] = dist[node][neighbor].min(weight);
            }
        }
        for k in 0..nodes {
            for i in 0..nodes {
                for j in 0..nodes {
                    if dist[i][k] + dist[k][j] < dist[i][j] {
                        dist[i][j] = dist[i][k] + dist[k][j];
                    }
                }
            }
        }
        dist
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(1.0)
    }

    #[test]
    fn test_both_searches_agree_on_fixed_seeds() {
        for seed in 0..20 {
            let (graph, coords) = random_road_graph(seed, 40, 0.12);
            let d = dijkstra(&graph, &0, &39).unwrap();
            let a = a_star(&graph, &coords, &0, &39).unwrap();

            assert_eq!(d.is_found(), a.is_found(), "seed {seed}");
            if let (Some(dc), Some(ac)) = (d.cost, a.cost) {
                assert!(close(dc, ac), "seed {seed}: {dc} vs {ac}");
                assert!(close(path_cost(&graph, &a.path).unwrap(), ac));
            }
        }
    }

    #[test]
    fn test_searches_are_idempotent() {
        let (graph, coords) = random_road_graph(7, 60, 0.08);

        let first = dijkstra(&graph, &3, &50).unwrap();
        let second = dijkstra(&graph, &3, &50).unwrap();
        assert_eq!(first, second);

        let first = a_star(&graph, &coords, &3, &50).unwrap();
        let second = a_star(&graph, &coords, &3, &50).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_coordinate_gaps_change_reachability() {
        // a - b - c, b has no coordinates: only Dijkstra can route through it
        let graph: HashMap<&str, Vec<(&str, f64)>> = HashMap::from([
            ("a", vec![("b", 1.0)]),
            ("b", vec![("a", 1.0), ("c", 1.0)]),
            ("c", vec![("b", 1.0)]),
        ]);
        let coords: HashMap<&str, (f64, f64)> =
            HashMap::from([("a", (0.0, 0.0)), ("c", (2.0, 0.0))]);

        assert_eq!(dijkstra(&graph, &"a", &"c").unwrap().path, vec!["a", "b", "c"]);

        let a = a_star(&graph, &coords, &"a", &"c").unwrap();
        assert_eq!(a.outcome, SearchOutcome::Unreachable);
        assert_eq!(a.visited, 1);
    }

    proptest! {
        /// Dijkstra is optimal, A* matches it and never expands more nodes
        #[test]
        fn prop_costs_match_brute_force(seed in any::<u64>(), nodes in 2usize..14, density in 0.1f64..0.6) {
            let (graph, coords) = random_road_graph(seed, nodes, density);
            let reference = floyd_warshall(&graph, nodes);

            for target in 1..nodes {
                let d = dijkstra(&graph, &0, &target).unwrap();
                let a = a_star(&graph, &coords, &0, &target).unwrap();
                let expected = reference[0][target];

                if expected.is_infinite() {
                    prop_assert_eq!(d.outcome, SearchOutcome::Unreachable);
                    prop_assert_eq!(a.outcome, SearchOutcome::Unreachable);
                    prop_assert!(d.path.is_empty() && a.path.is_empty());
                    continue;
                }

                let dc = d.cost.unwrap();
                let ac = a.cost.unwrap();
                prop_assert!(close(dc, expected), "dijkstra {} vs {}", dc, expected);
                prop_assert!(close(ac, expected), "a* {} vs {}", ac, expected);
                prop_assert!(close(path_cost(&graph, &d.path).unwrap(), dc));
                prop_assert_eq!(d.path.first(), Some(&0));
                prop_assert_eq!(a.path.last(), Some(&target));
                prop_assert!(a.visited <= d.visited, "a* {} > dijkstra {}", a.visited, d.visited);
            }
        }
    }
}
