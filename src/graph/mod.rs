//! Board state for Sim: the edges each player has colored, plus the combined view
//! used to find the edges that are still free.

pub mod combined_state;
pub mod edge;
pub mod error;
pub mod player;
pub mod player_graph;

mod display;

#[cfg(test)]
mod tests;

pub use combined_state::CombinedState;
pub use edge::{Edge, EdgeList};
pub use error::GraphError;
pub use player::Player;
pub use player_graph::PlayerGraph;

/// Fewest nodes a graph can have and still contain a triangle.
pub const MIN_NODES_COUNT: usize = 3;
pub const MAX_NODES_COUNT: usize = 64;

/// Below six nodes a fully colored graph can avoid triangles, so front ends raise
/// smaller requests to this size.
pub const PRACTICAL_MIN_NODES_COUNT: usize = 6;

/// The state of a Sim board: one `PlayerGraph` per player and the `CombinedState`
/// derived from them. Every mutation goes through this type so the combined view
/// never drifts from the union of the two player graphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphState {
    nodes_count: usize,
    graphs: [PlayerGraph; 2],
    combined: CombinedState,
}

impl GraphState {
    pub fn new(nodes_count: usize) -> Result<Self, GraphError> {
        if !(MIN_NODES_COUNT..=MAX_NODES_COUNT).contains(&nodes_count) {
            return Err(GraphError::InvalidNodeCount {
                nodes_count,
                min: MIN_NODES_COUNT,
                max: MAX_NODES_COUNT,
            });
        }

        Ok(Self {
            nodes_count,
            graphs: [PlayerGraph::new(nodes_count), PlayerGraph::new(nodes_count)],
            combined: CombinedState::new(nodes_count),
        })
    }

    #[inline]
    pub fn nodes_count(&self) -> usize {
        self.nodes_count
    }

    #[inline]
    pub fn graph(&self, player: Player) -> &PlayerGraph {
        &self.graphs[player.index()]
    }

    #[inline]
    pub fn combined(&self) -> &CombinedState {
        &self.combined
    }

    /// Builds the edge `{a, b}`, checking both nodes against this graph.
    pub fn edge(&self, a: usize, b: usize) -> Result<Edge, GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;
        Edge::new(a, b)
    }

    /// Returns true if `{a, b}` has not been colored by either player.
    pub fn is_valid_move(&self, a: usize, b: usize) -> Result<bool, GraphError> {
        let edge = self.edge(a, b)?;
        Ok(!self.combined.contains_edge(edge))
    }

    pub fn owner(&self, edge: Edge) -> Option<Player> {
        Player::ALL
            .iter()
            .copied()
            .find(|&player| self.graph(player).contains_edge(edge))
    }

    /// Permanently colors `edge` for `player`.
    pub fn commit_move(&mut self, player: Player, edge: Edge) -> Result<(), GraphError> {
        self.add_edge(player, edge)
    }

    /// Colors `edge` for `player` until the matching `undo_speculative`. Speculative
    /// moves must be undone in exactly the reverse order they were applied.
    pub fn apply_speculative(&mut self, player: Player, edge: Edge) -> Result<(), GraphError> {
        self.add_edge(player, edge)
    }

    pub fn undo_speculative(&mut self, player: Player, edge: Edge) -> Result<(), GraphError> {
        self.check_edge(edge)?;
        self.graphs[player.index()].pop(edge)?;
        self.combined.remove(edge);
        Ok(())
    }

    /// Uncolored edges in ascending `(i, j)` order.
    pub fn legal_moves(&self) -> EdgeList {
        self.combined.uncolored_edges()
    }

    pub fn has_legal_moves(&self) -> bool {
        !self.combined.is_full()
    }

    fn add_edge(&mut self, player: Player, edge: Edge) -> Result<(), GraphError> {
        self.check_edge(edge)?;
        if self.combined.contains_edge(edge) {
            return Err(GraphError::EdgeAlreadyColored { edge });
        }

        self.graphs[player.index()].push(edge);
        self.combined.insert(edge);
        Ok(())
    }

    fn check_edge(&self, edge: Edge) -> Result<(), GraphError> {
        // `low < high`, so checking the larger endpoint covers both.
        self.check_node(edge.high())
    }

    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node >= self.nodes_count {
            return Err(GraphError::NodeOutOfRange {
                node,
                nodes_count: self.nodes_count,
            });
        }
        Ok(())
    }
}
