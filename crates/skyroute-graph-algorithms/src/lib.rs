//! Directed graph core for Skyroute
//!
//! A small adjacency-list graph over labelled nodes plus the two analyses the
//! route analyzer needs: strongly connected components (Kosaraju) and
//! unweighted shortest paths (BFS). All traversals use explicit work stacks.

pub mod common;
pub mod scc;
pub mod pathfinding;

pub use common::{Graph, GraphError, GraphResult, NodeLabel};
pub use scc::{strongly_connected_components, SccResult};
pub use pathfinding::{bfs, is_reachable, shortest_path, PathResult};
