//! Route network data model
//!
//! Airports are the nodes and flight routes the directed edges. Airports
//! keep their declaration order, which is also the order the graph core
//! traverses them in.

pub mod airport;
pub mod datasets;
pub mod routes;

// Re-export main types
pub use airport::Airport;
pub use datasets::Dataset;
pub use routes::{NetworkError, NetworkResult, RouteNetwork};
