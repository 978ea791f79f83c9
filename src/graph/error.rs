use thiserror::Error;

use super::edge::Edge;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {node} is out of range for a graph with {nodes_count} nodes")]
    NodeOutOfRange { node: usize, nodes_count: usize },
    #[error("An edge must join two distinct nodes, got {node} twice")]
    SelfLoop { node: usize },
    #[error("Edge {edge} is already colored")]
    EdgeAlreadyColored { edge: Edge },
    #[error("Cannot undo edge {edge}, it is not the most recently applied move")]
    UndoOutOfOrder { edge: Edge },
    #[error("A graph needs between {min} and {max} nodes, got {nodes_count}")]
    InvalidNodeCount {
        nodes_count: usize,
        min: usize,
        max: usize,
    },
    #[error("Cannot parse an edge from `{input}`, expected `a-b`")]
    InvalidEdgeFormat { input: String },
}
