//! Shortest paths over road networks, uninformed (Dijkstra) versus
//! heuristic-guided (A*), both driven by an indexed min-priority-queue with
//! decrease-key.
//!
//! ```
//! use roadsearch::{RoadNetwork, SearchOutcome};
//!
//! let mut network = RoadNetwork::new();
//! network.add_node("a", 0.0, 0.0);
//! network.add_node("b", 3.0, 0.0);
//! network.add_node("c", 3.0, 4.0);
//! network.add_road("a", "b", Some(3.0)).unwrap();
//! network.add_road("b", "c", Some(4.0)).unwrap();
//! network.add_road("a", "c", Some(9.0)).unwrap();
//!
//! let route = network.a_star(&"a", &"c").unwrap();
//! assert_eq!(route.outcome, SearchOutcome::Reached);
//! assert_eq!(route.path, vec!["a", "b", "c"]);
//! assert_eq!(route.cost, Some(7.0));
//! ```

pub mod collections;
pub mod comparison;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod indexed_queue;
pub mod network;
pub mod options;

pub use comparison::{compare, Comparison, RunReport};
pub use errors::{QueueError, SearchError};
pub use graph_algos::{
    a_star::{a_star, a_star_with},
    dijkstra::{dijkstra, dijkstra_with},
    Adjacency, Coordinates, SearchOutcome, SearchResult,
};
pub use indexed_queue::IndexedPriorityQueue;
pub use network::{NodeLocator, RoadNetwork};
pub use options::{NetworkConfig, SearchOptions};
