mod locator;

pub use locator::NodeLocator;

use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::graph_algos::{a_star::a_star, dijkstra::dijkstra, SearchResult};
use crate::options::NetworkConfig;

use std::{fmt::Debug, hash::Hash};
use tracing::debug;


/// Undirected road network: adjacency list plus projected node positions
///
/// Every road is stored as two arcs, one per direction, with the same length.
/// Nodes added through `add_node` are graph keys even without roads, so
/// isolated intersections are valid (unreachable) endpoints.
#[derive(Debug, Clone)]
pub struct RoadNetwork<N> {
    config: NetworkConfig,
    adjacency: FxIndexMap<N, Vec<(N, f64)>>,
    coordinates: FxIndexMap<N, (f64, f64)>,
    roads: usize,
}

impl<N> Default for RoadNetwork<N>
where
    N: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> RoadNetwork<N>
where
    N: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            config,
            adjacency: FxIndexMap::default(),
            coordinates: FxIndexMap::default(),
            roads: 0,
        }
    }

    /// Register a node at a projected position, moving it if it already exists
    pub fn add_node(&mut self, id: N, x: f64, y: f64) {
        self.adjacency.entry(id.clone()).or_default();
        self.coordinates.insert(id, (x, y));
    }

    /// Add a road in both directions
    /// A missing length falls back to `NetworkConfig::default_length`
    pub fn add_road(&mut self, a: N, b: N, length: Option<f64>) -> Result<(), SearchError> {
        let length = length.unwrap_or(self.config.default_length);
        if length.is_nan() || length < 0.0 {
            return Err(SearchError::InvalidWeight(format!("{length:?} for road {a:?} - {b:?}")));
        }

        self.adjacency.entry(a.clone()).or_default().push((b.clone(), length));
        self.adjacency.entry(b).or_default().push((a, length));
        self.roads += 1;

        Ok(())
    }

    pub fn adjacency(&self) -> &FxIndexMap<N, Vec<(N, f64)>> {
        &self.adjacency
    }

    pub fn coordinates(&self) -> &FxIndexMap<N, (f64, f64)> {
        &self.coordinates
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads
    }

    /// Nearest-node index over the current coordinates
    pub fn locator(&self) -> Result<NodeLocator<'_, N>, SearchError> {
        debug!(nodes = self.coordinates.len(), "building node locator");
        NodeLocator::new(&self.coordinates)
    }

    pub fn dijkstra(&self, source: &N, target: &N) -> Result<SearchResult<N, f64>, SearchError> {
        dijkstra(&self.adjacency, source, target)
    }

    pub fn a_star(&self, source: &N, target: &N) -> Result<SearchResult<N, f64>, SearchError> {
        a_star(&self.adjacency, &self.coordinates, source, target)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::SearchOutcome;

    // Four intersections on a unit square with one diagonal
    fn square() -> RoadNetwork<u64> {
        let mut network = RoadNetwork::new();
        network.add_node(1, 0.0, 0.0);
        network.add_node(2, 1.0, 0.0);
        network.add_node(3, 1.0, 1.0);
        network.add_node(4, 0.0, 1.0);
        network.add_road(1, 2, Some(1.0)).unwrap();
        network.add_road(2, 3, Some(1.0)).unwrap();
        network.add_road(3, 4, Some(1.0)).unwrap();
        network.add_road(4, 1, Some(1.0)).unwrap();
        network.add_road(1, 3, Some(1.5)).unwrap();
        network
    }

    #[test]
    fn test_roads_are_stored_both_ways() {
        let network = square();
        assert_eq!(network.node_count(), 4);
        assert_eq!(network.road_count(), 5);
        assert!(network.adjacency()[&1u64].contains(&(3, 1.5)));
        assert!(network.adjacency()[&3u64].contains(&(1, 1.5)));
    }

    #[test]
    fn test_missing_length_uses_default() {
        let mut network = RoadNetwork::with_config(NetworkConfig { default_length: 7.0 });
        network.add_road("x", "y", None).unwrap();
        assert_eq!(network.adjacency()["y"], vec![("x", 7.0)]);

        let mut network: RoadNetwork<&str> = RoadNetwork::new();
        network.add_road("x", "y", None).unwrap();
        assert_eq!(network.adjacency()["x"], vec![("y", 1.0)]);
    }

    #[test]
    fn test_invalid_length_is_rejected() {
        let mut network = square();
        assert!(matches!(network.add_road(1, 2, Some(-3.0)), Err(SearchError::InvalidWeight(_))));
        assert!(matches!(network.add_road(1, 2, Some(f64::NAN)), Err(SearchError::InvalidWeight(_))));
        assert_eq!(network.road_count(), 5);
    }

    #[test]
    fn test_network_searches() {
        let mut network = square();
        network.add_node(5, 3.0, 3.0);

        let d = network.dijkstra(&1, &3).unwrap();
        let a = network.a_star(&1, &3).unwrap();
        assert_eq!(d.path, vec![1, 3]);
        assert_eq!(a.path, vec![1, 3]);

        let d = network.dijkstra(&1, &5).unwrap();
        assert_eq!(d.outcome, SearchOutcome::Unreachable);
        assert_eq!(d.visited, 4);
    }
}
