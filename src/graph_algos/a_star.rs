use crate::collections::{FxHashMap, FxIndexSet};
use crate::errors::SearchError;
use crate::geometry::straight_line;
use crate::indexed_queue::IndexedPriorityQueue;
use super::{check_weight, path_cost, shortest_path, Adjacency, Coordinates, SearchOutcome, SearchResult};

use std::{
    hash::Hash,
    fmt::Debug,
};
use num_traits::Float;
use tracing::{debug, trace, warn};



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Nodes are expanded by f = g + h where g is the best known distance from the
/// source and h the straight-line distance to the target.
///
/// The approach has 2 requirements the search does not verify:
/// 1. The heuristic must be admissible (never overestimates the true cost to
///    reach the target). With road lengths as weights and projected coordinates
///    this holds as long as no arc is shorter than the straight line between
///    its endpoints.
/// 2. Every node on the route needs coordinates. Neighbors without a position
///    are skipped, so A* can miss routes Dijkstra finds on the same graph.
///
/// `source == target` returns `[source]` with no work; a source or target
/// without coordinates returns an empty path with no work.
pub fn a_star<N, C, G, P>(graph: &G, coords: &P, source: &N, target: &N) -> Result<SearchResult<N, C>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
    G: Adjacency<N, C>,
    P: Coordinates<N, C>,
    {
    a_star_with(graph, coords, source, target, |_| false)
}


/// A* with a stop predicate, see `dijkstra_with`
pub fn a_star_with<N, C, G, P, S>(graph: &G, coords: &P, source: &N, target: &N, mut stop: S) -> Result<SearchResult<N, C>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
    G: Adjacency<N, C>,
    P: Coordinates<N, C>,
    S: FnMut(usize) -> bool,
    {

    if source == target {
        return Ok(SearchResult {
            path: vec![source.clone()],
            visited: 0,
            cost: Some(C::zero()),
            outcome: SearchOutcome::Reached,
        });
    }

    let (Some(start), Some(goal)) = (coords.position(source), coords.position(target)) else {
        debug!(?source, ?target, "a_star: endpoint without coordinates");
        return Ok(SearchResult::invalid_endpoint());
    };

    // g score - confirmed cost from source, absent means infinity
    let mut g_score: FxHashMap<N, C> = FxHashMap::default();
    let mut parent: FxHashMap<N, N> = FxHashMap::default();

    // Closed list, a node popped a second time is skipped
    let mut closed: FxIndexSet<N> = FxIndexSet::default();

    // Open list, keyed by f = g + h
    let mut open: IndexedPriorityQueue<N, C> = IndexedPriorityQueue::new();
    g_score.insert(source.clone(), C::zero());
    open.insert(source.clone(), straight_line(start, goal))?;

    let mut visited = 0;
    let mut outcome = SearchOutcome::Unreachable;

    while !open.is_empty() {
        if stop(visited) {
            warn!(?source, ?target, visited, "a_star: interrupted");
            outcome = SearchOutcome::Interrupted;
            break;
        }

        let Some((node, f_cost)) = open.extract_min() else {
            break;
        };

        if !closed.insert(node.clone()) {
            continue;
        }
        visited += 1;
        trace!(?node, ?f_cost, "a_star: closed");

        // the first time the target is popped its g score is final
        if node == *target {
            outcome = SearchOutcome::Reached;
            break;
        }

        let g = g_score.get(&node).copied().unwrap_or_else(C::infinity);

        for (neighbor, weight) in graph.arcs(&node) {
            let weight = check_weight(*weight)?;

            // no coordinates, no heuristic: unreachable for this search
            let Some(position) = coords.position(neighbor) else {
                continue;
            };

            let tentative = g + weight;
            if tentative >= g_score.get(neighbor).copied().unwrap_or_else(C::infinity) {
                continue;
            }

            g_score.insert(neighbor.clone(), tentative);
            parent.insert(neighbor.clone(), node.clone());

            let f = tentative + straight_line(position, goal);
            if open.contains(neighbor) {
                open.decrease_key(neighbor, f)?;
            } else {
                open.insert(neighbor.clone(), f)?;
            }
        }
    }

    debug!(?source, ?target, visited, ?outcome, "a_star: done");

    if outcome != SearchOutcome::Reached {
        return Ok(SearchResult::unfinished(visited, outcome));
    }

    // with an inconsistent heuristic a closed node can still have its parent
    // moved, so g_score[target] may be stale for the chain walked here
    let path = shortest_path(&parent, source, target);
    let cost = path_cost(graph, &path);

    Ok(SearchResult {
        path,
        visited,
        cost,
        outcome,
    })
}
