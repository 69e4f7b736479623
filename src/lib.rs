//! Skyroute
//!
//! Connectivity analysis for a directed network of airports and flight
//! routes: which airports are mutually reachable (strongly connected
//! components) and the fewest-hop route between two airports.
//!
//! # Layout
//!
//! - [`network`]: airports, routes and the bundled datasets
//! - [`algo`]: adapter that turns a [`RouteNetwork`] into a graph and
//!   answers route queries
//! - `skyroute-graph-algorithms`: the graph core (Kosaraju SCC, BFS)
//!
//! ## Example Usage
//!
//! ```rust
//! use skyroute::{datasets, RouteAnalyzer};
//!
//! let analyzer = RouteAnalyzer::new(datasets::indian_airports().unwrap()).unwrap();
//!
//! // DEL and MAA sit on the same cycle of routes
//! assert!(analyzer.same_component("DEL", "MAA").unwrap());
//!
//! // PNQ and AMD only fly to each other
//! assert_eq!(analyzer.shortest_route("PNQ", "DEL").unwrap(), None);
//!
//! let route = analyzer.shortest_route("GOI", "MAA").unwrap().unwrap();
//! assert_eq!(skyroute::algo::format_route(&route), "GOI -> BOM -> HYD -> CCU -> DEL -> BLR -> MAA");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod network;

// Re-export main types for convenience
pub use algo::{build_graph, NetworkSummary, RouteAnalyzer};
pub use network::{datasets, Airport, Dataset, NetworkError, NetworkResult, RouteNetwork};

pub use skyroute_graph_algorithms::{Graph, GraphError, GraphResult, PathResult, SccResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
