//! Monochromatic triangle detection.

use smallvec::SmallVec;

use crate::graph::{Edge, PlayerGraph, MAX_NODES_COUNT};

const TRIANGLE_LENGTH: usize = 3;

/// Visited markers, kept on the stack for every supported graph size.
type Visited = SmallVec<[bool; MAX_NODES_COUNT]>;

/// Returns true if `graph` contains three distinct nodes that are pairwise joined.
///
/// From every start node this walks exactly three edges through the graph without
/// revisiting a node, and succeeds when the last step lands back on the start.
pub fn has_triangle(graph: &PlayerGraph) -> bool {
    let mut visited: Visited = SmallVec::from_elem(false, graph.nodes_count());
    (0..graph.nodes_count())
        .any(|start| closes_walk(graph, &mut visited, TRIANGLE_LENGTH, start, start))
}

/// Returns true if `edge`, already colored in `graph`, is a side of a triangle.
/// On a graph that was triangle-free before `edge` was added this is equivalent to
/// `has_triangle`, at the cost of one pass over the shorter neighbour list.
pub fn completes_triangle(graph: &PlayerGraph, edge: Edge) -> bool {
    debug_assert!(
        graph.contains_edge(edge),
        "{} must be colored in the graph it is checked against",
        edge
    );
    let (low, high) = edge.endpoints();
    let (pivot, other) = if graph.degree(low) <= graph.degree(high) {
        (low, high)
    } else {
        (high, low)
    };

    graph
        .neighbours(pivot)
        .iter()
        .any(|&node| node != other && graph.contains(node, other))
}

fn closes_walk(
    graph: &PlayerGraph,
    visited: &mut [bool],
    remaining: usize,
    current: usize,
    start: usize,
) -> bool {
    if remaining == 1 {
        return graph.contains(current, start);
    }

    visited[current] = true;
    let mut found = false;
    for &next in graph.neighbours(current) {
        if !visited[next] && closes_walk(graph, visited, remaining - 1, next, start) {
            found = true;
            break;
        }
    }
    visited[current] = false;

    found
}
