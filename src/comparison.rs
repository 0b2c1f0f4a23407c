use crate::errors::SearchError;
use crate::graph_algos::{
    a_star::a_star_with, dijkstra::dijkstra_with, Adjacency, Coordinates, SearchOutcome, SearchResult,
};
use crate::options::SearchOptions;

use serde::Serialize;
use std::{
    fmt::Debug,
    hash::Hash,
    time::{Duration, Instant},
};
use tracing::info;


/// One timed search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport<N> {
    pub path: Vec<N>,
    pub visited: usize,
    pub cost: Option<f64>,
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

impl<N> RunReport<N> {
    fn new(result: SearchResult<N, f64>, elapsed: Duration) -> Self {
        Self {
            path: result.path,
            visited: result.visited,
            cost: result.cost,
            outcome: result.outcome,
            elapsed,
        }
    }
}

/// Dijkstra and A* on the same query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison<N> {
    pub dijkstra: RunReport<N>,
    pub a_star: RunReport<N>,
}

impl<N> Comparison<N> {
    /// Both found a route of the same length (relative tolerance 1e-9),
    /// or both found none
    pub fn costs_agree(&self) -> bool {
        match (self.dijkstra.cost, self.a_star.cost) {
            (Some(d), Some(a)) => (d - a).abs() <= 1e-9 * d.abs().max(1.0),
            (None, None) => true,
            _ => false,
        }
    }

    /// A* expansions per Dijkstra expansion, None if Dijkstra did no work
    pub fn expansion_ratio(&self) -> Option<f64> {
        if self.dijkstra.visited == 0 {
            return None;
        }
        Some(self.a_star.visited as f64 / self.dijkstra.visited as f64)
    }
}


/// Run both searches on one query, each under its own guard built from `options`
pub fn compare<N, G, P>(
    graph: &G,
    coords: &P,
    source: &N,
    target: &N,
    options: &SearchOptions,
) -> Result<Comparison<N>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    G: Adjacency<N, f64>,
    P: Coordinates<N, f64>,
{
    let started = Instant::now();
    let result = dijkstra_with(graph, source, target, options.guard())?;
    let dijkstra = RunReport::new(result, started.elapsed());

    let started = Instant::now();
    let result = a_star_with(graph, coords, source, target, options.guard())?;
    let a_star = RunReport::new(result, started.elapsed());

    info!(
        ?source,
        ?target,
        dijkstra_visited = dijkstra.visited,
        dijkstra_ms = dijkstra.elapsed.as_secs_f64() * 1000.0,
        a_star_visited = a_star.visited,
        a_star_ms = a_star.elapsed.as_secs_f64() * 1000.0,
        "search comparison"
    );

    Ok(Comparison { dijkstra, a_star })
}
