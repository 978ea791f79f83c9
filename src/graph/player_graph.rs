use smallvec::SmallVec;

use super::edge::{Edge, EdgeList};
use super::error::GraphError;

type Neighbours = SmallVec<[usize; 8]>;

/// The edges colored by one player. Each node keeps its neighbours in the order
/// they were added, so removing an edge is a pop from the back of both endpoint
/// lists, and speculative moves must be undone in reverse order of application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerGraph {
    nodes_count: usize,
    neighbours: Vec<Neighbours>,
    /// Row-major `nodes_count * nodes_count` adjacency matrix, kept symmetric.
    membership: Vec<bool>,
    edge_count: usize,
}

impl PlayerGraph {
    pub fn new(nodes_count: usize) -> Self {
        Self {
            nodes_count,
            neighbours: vec![Neighbours::new(); nodes_count],
            membership: vec![false; nodes_count * nodes_count],
            edge_count: 0,
        }
    }

    #[inline]
    pub fn nodes_count(&self) -> usize {
        self.nodes_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Returns true if `a` and `b` are joined in this graph. Both nodes must be in range.
    #[inline]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.membership[a * self.nodes_count + b]
    }

    #[inline]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.contains(edge.low(), edge.high())
    }

    /// Neighbours of `node`, oldest first.
    #[inline]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        &self.neighbours[node]
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbours[node].len()
    }

    /// All edges in ascending order.
    pub fn edges(&self) -> EdgeList {
        let mut edges = EdgeList::new();
        for low in 0..self.nodes_count {
            for &high in self.neighbours[low].iter().filter(|&&high| high > low) {
                edges.push(Edge { low, high });
            }
        }
        edges.sort_unstable();
        edges
    }

    pub(super) fn push(&mut self, edge: Edge) {
        let (low, high) = edge.endpoints();
        self.neighbours[low].push(high);
        self.neighbours[high].push(low);
        self.set_membership(low, high, true);
        self.edge_count += 1;
    }

    /// Removes `edge`, which must be the last edge pushed at both of its endpoints.
    /// Nothing is modified when it is not.
    pub(super) fn pop(&mut self, edge: Edge) -> Result<(), GraphError> {
        let (low, high) = edge.endpoints();
        let is_last = self.neighbours[low].last() == Some(&high)
            && self.neighbours[high].last() == Some(&low);
        if !is_last {
            return Err(GraphError::UndoOutOfOrder { edge });
        }

        self.neighbours[low].pop();
        self.neighbours[high].pop();
        self.set_membership(low, high, false);
        self.edge_count -= 1;
        Ok(())
    }

    fn set_membership(&mut self, a: usize, b: usize, value: bool) {
        self.membership[a * self.nodes_count + b] = value;
        self.membership[b * self.nodes_count + a] = value;
    }
}
