//! Strongly connected components
//!
//! Kosaraju's two-pass algorithm: a depth-first pass records finish order on
//! the graph, then a second pass over the transposed graph, taking roots in
//! reverse finish order, claims one component per root.
//!
//! Both passes walk an explicit stack of `(node, next successor)` frames, so
//! the depth of the graph is bounded by heap memory rather than the call
//! stack.

use super::common::{Graph, NodeLabel};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Result of the SCC algorithm.
///
/// Owns its labels, so it stays valid after the graph it was computed from
/// is modified or dropped.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SccResult<N> {
    /// Components in the order their roots were popped from the finish stack
    pub components: Vec<Vec<N>>,
    /// Map of node -> index into `components`
    #[cfg_attr(feature = "serde", serde(skip))]
    pub node_component: HashMap<N, usize>,
}

impl<N: NodeLabel> SccResult<N> {
    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[N]> + '_ {
        self.components.iter().map(Vec::as_slice)
    }

    pub fn component_index<Q>(&self, node: &Q) -> Option<usize>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.node_component.get(node).copied()
    }

    /// The component containing `node`
    pub fn component_of<Q>(&self, node: &Q) -> Option<&[N]>
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.component_index(node)?;
        self.components.get(idx).map(Vec::as_slice)
    }

    /// True when both nodes are known and mutually reachable.
    pub fn same_component<Q>(&self, a: &Q, b: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match (self.component_index(a), self.component_index(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }

    /// The biggest component; the earliest one wins a tie.
    pub fn largest(&self) -> Option<&[N]> {
        self.components
            .iter()
            .rev()
            .max_by_key(|component| component.len())
            .map(Vec::as_slice)
    }

    /// Components with more than one node
    pub fn nontrivial(&self) -> impl Iterator<Item = &[N]> + '_ {
        self.iter().filter(|component| component.len() > 1)
    }
}

/// Strongly Connected Components (Kosaraju)
///
/// Every node lands in exactly one component. Ordering is deterministic for
/// a fixed node order and edge insertion order: components follow the
/// second-pass root order, and nodes inside a component follow discovery
/// order on the transposed graph.
pub fn strongly_connected_components<N: NodeLabel>(graph: &Graph<N>) -> SccResult<N> {
    let n = graph.node_count();

    // Pass 1: finish order on the original graph
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);
    for start in 0..n {
        if !visited[start] {
            depth_first(graph, start, &mut visited, |_| {}, |idx| finish_order.push(idx));
        }
    }

    // Pass 2: claim components on the transposed graph
    let transposed = graph.transpose();
    let mut visited = vec![false; n];
    let mut member_indices: Vec<Vec<usize>> = Vec::new();
    while let Some(root) = finish_order.pop() {
        if visited[root] {
            continue;
        }
        let mut members = Vec::new();
        depth_first(&transposed, root, &mut visited, |idx| members.push(idx), |_| {});
        member_indices.push(members);
    }

    // Build results
    let labels: Vec<&N> = graph.nodes().collect();
    let mut components = Vec::with_capacity(member_indices.len());
    let mut node_component = HashMap::with_capacity(n);

    for (component_id, members) in member_indices.into_iter().enumerate() {
        let component: Vec<N> = members.into_iter().map(|idx| labels[idx].clone()).collect();
        for node in &component {
            node_component.insert(node.clone(), component_id);
        }
        components.push(component);
    }

    tracing::debug!(
        nodes = n,
        edges = graph.edge_count(),
        components = components.len(),
        "computed strongly connected components"
    );

    SccResult {
        components,
        node_component,
    }
}

/// Iterative DFS from `start`, calling `on_enter` when a node is first
/// reached and `on_finish` once all of its successors are done.
///
/// `visited` is shared with the caller so consecutive walks never revisit.
fn depth_first<N: NodeLabel>(
    graph: &Graph<N>,
    start: usize,
    visited: &mut [bool],
    mut on_enter: impl FnMut(usize),
    mut on_finish: impl FnMut(usize),
) {
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    visited[start] = true;
    on_enter(start);

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        match graph.successor_indices(node).get(next) {
            Some(&succ) => {
                frame.1 += 1;
                if !visited[succ] {
                    visited[succ] = true;
                    on_enter(succ);
                    stack.push((succ, 0));
                }
            }
            None => {
                stack.pop();
                on_finish(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn as_sets<N: NodeLabel + Ord>(result: &SccResult<N>) -> BTreeSet<BTreeSet<N>> {
        result
            .iter()
            .map(|component| component.iter().cloned().collect())
            .collect()
    }

    fn set<N: Ord + Clone>(nodes: &[N]) -> BTreeSet<N> {
        nodes.iter().cloned().collect()
    }

    #[test]
    fn test_triangle_and_pair() {
        // A->B->C->A, D->E
        let graph = Graph::from_edges(
            ["A", "B", "C", "D", "E"],
            [("A", "B"), ("B", "C"), ("C", "A"), ("D", "E")],
        )
        .unwrap();

        let result = strongly_connected_components(&graph);

        assert_eq!(result.len(), 3);
        // Finish stack is [C, B, A, E, D]; D and E pop first
        assert_eq!(result.components, vec![vec!["D"], vec!["E"], vec!["A", "C", "B"]]);
        assert!(result.same_component("A", "C"));
        assert!(!result.same_component("D", "E"));
    }

    #[test]
    fn test_two_cycles() {
        let graph = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 1), (3, 4), (4, 3)]).unwrap();
        let result = strongly_connected_components(&graph);

        let expected: BTreeSet<BTreeSet<i32>> = [set(&[1, 2]), set(&[3, 4])].into_iter().collect();
        assert_eq!(as_sets(&result), expected);
        assert_eq!(result.component_index(&1), result.component_index(&2));
        assert_ne!(result.component_index(&1), result.component_index(&3));
    }

    #[test]
    fn test_no_edges_gives_singletons() {
        let graph = Graph::new(["a", "b", "c", "d"]);
        let result = strongly_connected_components(&graph);

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|component| component.len() == 1));
        assert_eq!(result.nontrivial().count(), 0);
        assert_eq!(result.component_of("c"), Some(&["c"][..]));
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<&str> = Graph::new([]);
        let result = strongly_connected_components(&graph);
        assert!(result.is_empty());
        assert_eq!(result.largest(), None);
    }

    #[test]
    fn test_self_loops_and_duplicates_do_not_change_partition() {
        let plain = Graph::from_edges(["A", "B", "C"], [("A", "B"), ("B", "A"), ("B", "C")]).unwrap();
        let noisy = Graph::from_edges(
            ["A", "B", "C"],
            [("A", "B"), ("A", "B"), ("A", "A"), ("B", "A"), ("C", "C"), ("B", "C"), ("B", "C")],
        )
        .unwrap();

        let plain = strongly_connected_components(&plain);
        let noisy = strongly_connected_components(&noisy);

        assert_eq!(as_sets(&plain), as_sets(&noisy));
        assert_eq!(plain.len(), 2);
    }

    #[test]
    fn test_repeated_runs_agree() {
        let graph = Graph::from_edges(
            ["A", "B", "C", "D"],
            [("A", "B"), ("B", "C"), ("C", "B"), ("C", "D")],
        )
        .unwrap();

        let first = strongly_connected_components(&graph);
        let second = strongly_connected_components(&graph);
        assert_eq!(first.components, second.components);
    }

    #[test]
    fn test_result_outlives_graph_changes() {
        let mut graph = Graph::new(["A", "B"]);
        graph.add_edge("A", "B").unwrap();
        let before = strongly_connected_components(&graph);

        graph.add_edge("B", "A").unwrap();
        let after = strongly_connected_components(&graph);

        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 1);
        assert!(!before.same_component("A", "B"));
    }

    #[test]
    fn test_largest_prefers_earliest_on_tie() {
        let graph = Graph::from_edges(
            ["A", "B", "C", "D", "E"],
            [("A", "B"), ("B", "A"), ("C", "D"), ("D", "C")],
        )
        .unwrap();
        let result = strongly_connected_components(&graph);

        let largest = result.largest().unwrap();
        assert_eq!(largest, result.components.iter().find(|c| c.len() == 2).unwrap().as_slice());
        assert_eq!(result.nontrivial().count(), 2);
    }

    #[test]
    fn test_unknown_node_lookups() {
        let graph = Graph::new(["A"]);
        let result = strongly_connected_components(&graph);

        assert_eq!(result.component_of("Z"), None);
        assert!(!result.same_component("A", "Z"));
    }

    #[test]
    fn test_long_cycle_does_not_overflow_stack() {
        let n = 100_000u32;
        let mut graph = Graph::new(0..n);
        for i in 0..n {
            graph.add_edge(&i, &((i + 1) % n)).unwrap();
        }

        let result = strongly_connected_components(&graph);
        assert_eq!(result.len(), 1);
        assert_eq!(result.components[0].len(), n as usize);
    }

    #[test]
    fn test_long_chain_gives_singletons() {
        let n = 100_000u32;
        let mut graph = Graph::new(0..n);
        for i in 1..n {
            graph.add_edge(&(i - 1), &i).unwrap();
        }

        let result = strongly_connected_components(&graph);
        assert_eq!(result.len(), n as usize);
        // Root of the chain finishes last, so it pops first
        assert_eq!(result.components[0], vec![0]);
    }
}
