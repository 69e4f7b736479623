//! Route analysis module
//!
//! Algorithms are implemented in the `skyroute-graph-algorithms` crate.
//! This module provides the integration/adapter layer: it turns a
//! [`RouteNetwork`] into a graph keyed by airport code and answers the
//! questions the front end asks about it.

use crate::network::{NetworkResult, RouteNetwork};
use serde::Serialize;
use skyroute_graph_algorithms::{Graph, GraphResult};

// Re-export algorithms
pub use skyroute_graph_algorithms::{
    bfs, is_reachable, shortest_path, PathResult,
    strongly_connected_components, SccResult,
};

/// Build a graph over every airport in the network, in declaration order
pub fn build_graph(network: &RouteNetwork) -> GraphResult<Graph<String>> {
    Graph::from_edges(
        network.codes().map(str::to_string),
        network.routes().iter().cloned(),
    )
}

/// Render a route as `A -> B -> C`
pub fn format_route<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|node| node.as_ref())
        .collect::<Vec<&str>>()
        .join(" -> ")
}

/// Headline numbers for a route network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub airports: usize,
    pub routes: usize,
    pub components: usize,
    /// Components with more than one airport
    pub connected_groups: usize,
    /// Airport codes of the biggest component
    pub largest_component: Vec<String>,
}

/// A route network together with its graph and SCC partition.
///
/// The partition is computed once when the analyzer is built and handed out
/// by reference; rebuild the analyzer to pick up a changed network.
pub struct RouteAnalyzer {
    network: RouteNetwork,
    graph: Graph<String>,
    components: SccResult<String>,
}

impl RouteAnalyzer {
    pub fn new(network: RouteNetwork) -> NetworkResult<Self> {
        let graph = build_graph(&network)?;
        let components = strongly_connected_components(&graph);

        tracing::info!(
            airports = network.airport_count(),
            routes = network.route_count(),
            components = components.len(),
            "route analyzer ready"
        );

        Ok(RouteAnalyzer {
            network,
            graph,
            components,
        })
    }

    pub fn network(&self) -> &RouteNetwork {
        &self.network
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// The SCC partition, by airport code
    pub fn components(&self) -> &SccResult<String> {
        &self.components
    }

    /// Each component as "Name (CODE)" strings
    pub fn component_names(&self) -> Vec<Vec<String>> {
        self.components
            .iter()
            .map(|component| {
                component
                    .iter()
                    .map(|code| self.network.display_name(code))
                    .collect()
            })
            .collect()
    }

    /// The component containing `code`
    pub fn component_of(&self, code: &str) -> NetworkResult<&[String]> {
        self.network.require(code)?;
        // Every airport is a graph node, so the lookup cannot miss
        Ok(self.components.component_of(code).unwrap_or_default())
    }

    /// Whether two airports can each reach the other
    pub fn same_component(&self, a: &str, b: &str) -> NetworkResult<bool> {
        self.network.require(a)?;
        self.network.require(b)?;

        let same = self.components.same_component(a, b);
        tracing::debug!(a, b, same, "same component check");
        Ok(same)
    }

    /// Fewest-hop route between two airports; `Ok(None)` when unreachable
    pub fn shortest_route(&self, from: &str, to: &str) -> NetworkResult<Option<Vec<String>>> {
        self.network.require(from)?;
        self.network.require(to)?;

        let route = bfs(&self.graph, from, to).map(|result| result.path);
        tracing::debug!(from, to, hops = ?route.as_ref().map(|r| r.len() - 1), "shortest route query");
        Ok(route)
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            airports: self.network.airport_count(),
            routes: self.network.route_count(),
            components: self.components.len(),
            connected_groups: self.components.nontrivial().count(),
            largest_component: self
                .components
                .largest()
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        }
    }
}
