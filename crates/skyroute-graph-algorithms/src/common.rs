//! Shared graph representation for the algorithms
//!
//! Nodes are mapped to dense indices (0..N) in declaration order, so the
//! traversals run over plain `Vec`s and the original labels are only touched
//! when results are built.

use indexmap::{Equivalent, IndexSet};
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Anything usable as a node label (airport codes, integers in tests, ...)
pub trait NodeLabel: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Debug + fmt::Display> NodeLabel for T {}

/// Errors that can occur while building a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid edge: source node {0} is not in the node set")]
    InvalidEdgeSource(String),

    #[error("Invalid edge: target node {0} is not in the node set")]
    InvalidEdgeTarget(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A directed graph over a fixed node set, stored as adjacency lists.
///
/// Edge endpoints must belong to the node set given at construction;
/// [`Graph::add_edge`] rejects anything else and leaves the graph untouched.
/// Duplicate edges and self-loops are kept as inserted.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// Node labels; the position of a label is its dense index
    nodes: IndexSet<N>,
    /// Outgoing edges: index -> successor indices, in insertion order
    outgoing: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<N: NodeLabel> Graph<N> {
    /// Create a graph over `nodes` with no edges.
    ///
    /// Repeated labels collapse onto their first occurrence.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let nodes: IndexSet<N> = nodes.into_iter().collect();
        let outgoing = vec![Vec::new(); nodes.len()];

        Graph {
            nodes,
            outgoing,
            edge_count: 0,
        }
    }

    /// Build a graph from a node set and an edge list, failing on the first
    /// edge whose endpoint is not a declared node.
    pub fn from_edges<I, E>(nodes: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new(nodes);
        for (u, v) in edges {
            graph.add_edge(&u, &v)?;
        }
        Ok(graph)
    }

    /// Build a graph whose node set is every edge endpoint, in order of
    /// first appearance.
    pub fn from_edge_list(edges: &[(N, N)]) -> Self {
        let mut nodes = IndexSet::with_capacity(edges.len());
        let pairs: Vec<(usize, usize)> = edges
            .iter()
            .map(|(u, v)| {
                let (u_idx, _) = nodes.insert_full(u.clone());
                let (v_idx, _) = nodes.insert_full(v.clone());
                (u_idx, v_idx)
            })
            .collect();

        let mut graph = Graph {
            outgoing: vec![Vec::new(); nodes.len()],
            nodes,
            edge_count: 0,
        };
        for (u_idx, v_idx) in pairs {
            graph.link(u_idx, v_idx);
        }
        graph
    }

    /// Append `v` to the successors of `u`.
    pub fn add_edge<Q>(&mut self, u: &Q, v: &Q) -> GraphResult<()>
    where
        Q: ?Sized + Hash + Equivalent<N> + fmt::Display,
    {
        let u_idx = self
            .index_of(u)
            .ok_or_else(|| GraphError::InvalidEdgeSource(u.to_string()))?;
        let v_idx = self
            .index_of(v)
            .ok_or_else(|| GraphError::InvalidEdgeTarget(v.to_string()))?;

        self.link(u_idx, v_idx);
        Ok(())
    }

    fn link(&mut self, u_idx: usize, v_idx: usize) {
        self.outgoing[u_idx].push(v_idx);
        self.edge_count += 1;
    }

    /// A new graph over the same nodes with every edge reversed.
    pub fn transpose(&self) -> Self {
        let mut incoming = vec![Vec::new(); self.node_count()];
        for (u_idx, successors) in self.outgoing.iter().enumerate() {
            for &v_idx in successors {
                incoming[v_idx].push(u_idx);
            }
        }

        Graph {
            nodes: self.nodes.clone(),
            outgoing: incoming,
            edge_count: self.edge_count,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node labels in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.nodes.contains(node)
    }

    /// Dense index of a node label
    pub fn index_of<Q>(&self, node: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.nodes.get_index_of(node)
    }

    /// Node label at a dense index
    pub fn node_at(&self, idx: usize) -> Option<&N> {
        self.nodes.get_index(idx)
    }

    /// Successor indices of a node (by index)
    pub fn successor_indices(&self, idx: usize) -> &[usize] {
        &self.outgoing[idx]
    }

    /// Successor labels of a node, in insertion order
    pub fn successors<Q>(&self, node: &Q) -> Option<impl Iterator<Item = &N> + '_>
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        let idx = self.index_of(node)?;
        Some(self.outgoing[idx].iter().map(move |&v_idx| &self.nodes[v_idx]))
    }

    pub fn has_edge<Q>(&self, u: &Q, v: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        match (self.index_of(u), self.index_of(v)) {
            (Some(u_idx), Some(v_idx)) => self.outgoing[u_idx].contains(&v_idx),
            _ => false,
        }
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.outgoing[idx].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_has_no_edges() {
        let graph = Graph::new(["A", "B", "C"]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        for idx in 0..3 {
            assert!(graph.successor_indices(idx).is_empty());
        }
        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_labels_collapse() {
        let graph = Graph::new(["A", "B", "A"]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.index_of("A"), Some(0));
        assert_eq!(graph.index_of("B"), Some(1));
    }

    #[test]
    fn test_add_edge_appends_in_order() {
        let mut graph = Graph::new(["A", "B", "C"]);
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();

        let successors: Vec<_> = graph.successors("A").unwrap().copied().collect();
        assert_eq!(successors, vec!["C", "B", "C"]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(0), 3);
        assert!(graph.has_edge("A", "B"));
        assert!(!graph.has_edge("B", "A"));
    }

    #[test]
    fn test_add_edge_rejects_unknown_endpoints() {
        let mut graph = Graph::new(["A", "B"]);

        let result = graph.add_edge("X", "A");
        assert_eq!(result, Err(GraphError::InvalidEdgeSource("X".to_string())));

        let result = graph.add_edge("A", "Y");
        assert_eq!(result, Err(GraphError::InvalidEdgeTarget("Y".to_string())));

        // Source is reported first when both are unknown
        let result = graph.add_edge("X", "Y");
        assert_eq!(result, Err(GraphError::InvalidEdgeSource("X".to_string())));

        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains("X"));
        assert!(graph.successors("A").unwrap().next().is_none());
    }

    #[test]
    fn test_error_messages() {
        let err = GraphError::InvalidEdgeTarget("PNQ".to_string());
        assert_eq!(err.to_string(), "Invalid edge: target node PNQ is not in the node set");
    }

    #[test]
    fn test_from_edges_stops_at_malformed_edge() {
        let result = Graph::from_edges(["A", "B"], [("A", "B"), ("B", "C")]);
        assert_eq!(result.unwrap_err(), GraphError::InvalidEdgeTarget("C".to_string()));

        let graph = Graph::from_edges(["A", "B"], [("A", "B"), ("B", "A")]).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_from_edge_list_registers_endpoints() {
        let edges = [("B", "C"), ("A", "B"), ("C", "A")];
        let graph = Graph::from_edge_list(&edges);

        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec!["B", "C", "A"]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_edge("A", "B"));
        assert!(graph.has_edge("C", "A"));
    }

    #[test]
    fn test_transpose_reverses_edges() {
        let mut graph = Graph::new([1, 2, 3]);
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&2, &3).unwrap();
        graph.add_edge(&2, &3).unwrap();
        graph.add_edge(&3, &3).unwrap();

        let transposed = graph.transpose();

        assert_eq!(transposed.nodes().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(transposed.edge_count(), 4);
        assert!(transposed.has_edge(&2, &1));
        assert!(transposed.has_edge(&3, &2));
        assert!(transposed.has_edge(&3, &3));
        assert!(!transposed.has_edge(&1, &2));
        assert_eq!(transposed.successors(&3).unwrap().count(), 3);

        // Receiver is untouched
        assert!(graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
    }

    #[test]
    fn test_owned_labels_lookup_by_str() {
        let mut graph = Graph::new(["DEL".to_string(), "BOM".to_string()]);
        graph.add_edge("DEL", "BOM").unwrap();

        assert!(graph.has_edge("DEL", "BOM"));
        assert_eq!(graph.node_at(1).map(String::as_str), Some("BOM"));
        assert_eq!(graph.node_at(2), None);
    }
}
