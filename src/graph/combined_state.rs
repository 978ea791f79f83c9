use super::edge::{Edge, EdgeList};

/// The union of both players' edges. It is derived state: `GraphState` updates it
/// in the same call that updates a `PlayerGraph`, and it is only read to decide
/// legality and to enumerate the remaining moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedState {
    nodes_count: usize,
    colored: Vec<bool>,
    colored_count: usize,
}

impl CombinedState {
    pub fn new(nodes_count: usize) -> Self {
        Self {
            nodes_count,
            colored: vec![false; nodes_count * nodes_count],
            colored_count: 0,
        }
    }

    #[inline]
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.colored[a * self.nodes_count + b]
    }

    #[inline]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.contains(edge.low(), edge.high())
    }

    pub fn colored_count(&self) -> usize {
        self.colored_count
    }

    pub fn total_edge_count(&self) -> usize {
        self.nodes_count * (self.nodes_count - 1) / 2
    }

    pub fn is_full(&self) -> bool {
        self.colored_count == self.total_edge_count()
    }

    /// Uncolored edges in ascending `(i, j)` order.
    pub fn uncolored_edges(&self) -> EdgeList {
        let mut edges = EdgeList::new();
        for low in 0..self.nodes_count {
            for high in (low + 1)..self.nodes_count {
                if !self.contains(low, high) {
                    edges.push(Edge { low, high });
                }
            }
        }
        edges
    }

    pub(super) fn insert(&mut self, edge: Edge) {
        self.set(edge, true);
        self.colored_count += 1;
    }

    pub(super) fn remove(&mut self, edge: Edge) {
        self.set(edge, false);
        self.colored_count -= 1;
    }

    fn set(&mut self, edge: Edge, value: bool) {
        let (low, high) = edge.endpoints();
        self.colored[low * self.nodes_count + high] = value;
        self.colored[high * self.nodes_count + low] = value;
    }
}
