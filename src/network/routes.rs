//! In-memory route network
//!
//! Routes may only connect airports that were added first; the same strict
//! policy the graph core applies to its edges.

use super::airport::Airport;
use indexmap::IndexMap;
use skyroute_graph_algorithms::GraphError;
use thiserror::Error;

/// Errors that can occur while building or querying a route network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Unknown airport: {0}")]
    UnknownAirport(String),

    #[error("Airport {0} already exists")]
    DuplicateAirport(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Airports keyed by code plus the directed routes between them
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    /// Airports in declaration order
    airports: IndexMap<String, Airport>,
    /// Directed (from, to) code pairs, duplicates allowed
    routes: Vec<(String, String)>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from `(code, name)` and `(from, to)` tables
    pub fn from_tables(airports: &[(&str, &str)], routes: &[(&str, &str)]) -> NetworkResult<Self> {
        let mut network = RouteNetwork::new();
        for &(code, name) in airports {
            network.add_airport(code, name)?;
        }
        for &(from, to) in routes {
            network.add_route(from, to)?;
        }
        Ok(network)
    }

    pub fn add_airport(&mut self, code: impl Into<String>, name: impl Into<String>) -> NetworkResult<()> {
        let code = code.into();
        if self.airports.contains_key(&code) {
            return Err(NetworkError::DuplicateAirport(code));
        }
        self.airports.insert(code.clone(), Airport::new(code, name));
        Ok(())
    }

    /// Add a directed route. Both airports must already exist.
    pub fn add_route(&mut self, from: &str, to: &str) -> NetworkResult<()> {
        self.require(from)?;
        self.require(to)?;
        self.routes.push((from.to_string(), to.to_string()));
        Ok(())
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    /// Look up an airport, treating an unknown code as an error
    pub fn require(&self, code: &str) -> NetworkResult<&Airport> {
        self.airport(code)
            .ok_or_else(|| NetworkError::UnknownAirport(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.airport(code).map(|a| a.name.as_str())
    }

    /// "Name (CODE)" for known airports, the bare code otherwise
    pub fn display_name(&self, code: &str) -> String {
        match self.airport(code) {
            Some(airport) => airport.to_string(),
            None => code.to_string(),
        }
    }

    /// Airport codes in declaration order
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.airports.keys().map(String::as_str)
    }

    pub fn airports(&self) -> impl Iterator<Item = &Airport> + '_ {
        self.airports.values()
    }

    pub fn routes(&self) -> &[(String, String)] {
        &self.routes
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}
