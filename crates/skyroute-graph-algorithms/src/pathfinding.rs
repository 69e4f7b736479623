//! Pathfinding algorithms
//!
//! Every edge costs the same, so breadth-first search already yields a
//! minimum-hop path; no priority queue is involved.

use super::common::{Graph, NodeLabel};
use indexmap::Equivalent;
use std::collections::VecDeque;
use std::hash::Hash;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathResult<N> {
    pub source: N,
    pub target: N,
    /// Nodes from source to target, both inclusive
    pub path: Vec<N>,
    /// Number of edges on the path
    pub hops: usize,
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Returns `None` when either endpoint is not a node of `graph` or the
/// target cannot be reached. Among equally short paths, the one found first
/// through successor insertion order wins.
pub fn bfs<N, Q>(graph: &Graph<N>, source: &Q, target: &Q) -> Option<PathResult<N>>
where
    N: NodeLabel,
    Q: ?Sized + Hash + Equivalent<N>,
{
    let source_idx = graph.index_of(source)?;
    let target_idx = graph.index_of(target)?;

    let n = graph.node_count();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    visited[source_idx] = true;
    queue.push_back(source_idx);

    while let Some(current_idx) = queue.pop_front() {
        if current_idx == target_idx {
            // Reconstruct path
            let mut indices = vec![target_idx];
            let mut curr = target_idx;
            while let Some(prev) = parent[curr] {
                indices.push(prev);
                curr = prev;
            }
            indices.reverse();

            let path: Vec<N> = indices
                .into_iter()
                .filter_map(|idx| graph.node_at(idx).cloned())
                .collect();

            return Some(PathResult {
                source: graph.node_at(source_idx)?.clone(),
                target: graph.node_at(target_idx)?.clone(),
                hops: path.len() - 1,
                path,
            });
        }

        for &next_idx in graph.successor_indices(current_idx) {
            if !visited[next_idx] {
                visited[next_idx] = true;
                parent[next_idx] = Some(current_idx);
                queue.push_back(next_idx);
            }
        }
    }

    None
}

/// Shortest path over a bare edge list.
///
/// The node set is whatever appears in `edges`; an endpoint missing from the
/// list simply has no path, even when `source == target`.
pub fn shortest_path<N, Q>(edges: &[(N, N)], source: &Q, target: &Q) -> Option<Vec<N>>
where
    N: NodeLabel,
    Q: ?Sized + Hash + Equivalent<N>,
{
    let graph = Graph::from_edge_list(edges);
    let result = bfs(&graph, source, target);

    tracing::debug!(
        edges = edges.len(),
        hops = ?result.as_ref().map(|r| r.hops),
        "shortest path search finished"
    );

    result.map(|r| r.path)
}

/// Whether `to` can be reached from `from` along directed edges.
///
/// A known node always reaches itself.
pub fn is_reachable<N, Q>(graph: &Graph<N>, from: &Q, to: &Q) -> bool
where
    N: NodeLabel,
    Q: ?Sized + Hash + Equivalent<N>,
{
    bfs(graph, from, to).is_some()
}
