use crate::collections::{FxHashMap, FxIndexSet};
use crate::errors::SearchError;
use crate::indexed_queue::IndexedPriorityQueue;
use super::{check_weight, shortest_path, Adjacency, SearchOutcome, SearchResult};

use std::{fmt::Debug, hash::Hash};
use num_traits::Float;
use tracing::{debug, trace, warn};




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From source, finalize nodes in order of distance until the target is finalized
///
/// Both endpoints must be registered as keys of the graph, otherwise the
/// result is an empty path with no work done. An unreachable target gives an
/// empty path and the size of the source's component as the visited count.
/// `Err` is only returned for negative or NaN arc weights.
pub fn dijkstra<N, C, G>(graph: &G, source: &N, target: &N) -> Result<SearchResult<N, C>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
    G: Adjacency<N, C>,
    {
    dijkstra_with(graph, source, target, |_| false)
}


/// Dijkstra with a stop predicate
/// `stop` is called before every expansion with the number of finalized nodes,
/// returning true abandons the search with `SearchOutcome::Interrupted`
pub fn dijkstra_with<N, C, G, S>(graph: &G, source: &N, target: &N, mut stop: S) -> Result<SearchResult<N, C>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
    G: Adjacency<N, C>,
    S: FnMut(usize) -> bool,
    {

    if !graph.contains_node(source) || !graph.contains_node(target) {
        debug!(?source, ?target, "dijkstra: endpoint not in graph");
        return Ok(SearchResult::invalid_endpoint());
    }

    // Best known cost from source, absent means infinity
    let mut distance: FxHashMap<N, C> = FxHashMap::default();
    // previous node on the best known path
    let mut predecessor: FxHashMap<N, N> = FxHashMap::default();
    // nodes whose distance is confirmed - never relaxed or expanded again
    let mut finalized: FxIndexSet<N> = FxIndexSet::default();

    // Frontier is populated lazily: a node is queued when first relaxed
    let mut frontier: IndexedPriorityQueue<N, C> = IndexedPriorityQueue::with_capacity(graph.node_count().min(1024));
    distance.insert(source.clone(), C::zero());
    frontier.insert(source.clone(), C::zero())?;

    let mut outcome = SearchOutcome::Unreachable;

    while !frontier.is_empty() {
        if stop(finalized.len()) {
            warn!(?source, ?target, visited = finalized.len(), "dijkstra: interrupted");
            outcome = SearchOutcome::Interrupted;
            break;
        }

        let Some((node, dist)) = frontier.extract_min() else {
            break;
        };

        if !finalized.insert(node.clone()) {
            continue;
        }
        trace!(?node, ?dist, "dijkstra: finalized");

        if node == *target {
            outcome = SearchOutcome::Reached;
            break;
        }

        // everything left in the frontier is unreachable
        if dist.is_infinite() {
            break;
        }

        for (neighbor, weight) in graph.arcs(&node) {
            let weight = check_weight(*weight)?;
            if finalized.contains(neighbor) {
                continue;
            }

            let new_cost = dist + weight;
            let best = distance.get(neighbor).copied().unwrap_or_else(C::infinity);
            if new_cost >= best {
                // The existing path is at least as good
                continue;
            }

            distance.insert(neighbor.clone(), new_cost);
            predecessor.insert(neighbor.clone(), node.clone());
            if frontier.contains(neighbor) {
                frontier.decrease_key(neighbor, new_cost)?;
            } else {
                frontier.insert(neighbor.clone(), new_cost)?;
            }
        }
    }

    let visited = finalized.len();
    debug!(?source, ?target, visited, ?outcome, "dijkstra: done");

    if outcome != SearchOutcome::Reached {
        return Ok(SearchResult::unfinished(visited, outcome));
    }

    Ok(SearchResult {
        path: shortest_path(&predecessor, source, target),
        visited,
        cost: distance.get(target).copied(),
        outcome,
    })
}
