//! Static evaluation at the search horizon.
//!
//! An open completion is a path of two edges in one player's color whose endpoints
//! are not joined by any colored edge yet: a triangle that is still waiting for its
//! third side. The player holding more of them is the one more likely to be forced
//! into closing a triangle, so the position favors their opponent.

use smallvec::SmallVec;

use crate::graph::{CombinedState, GraphState, Player, PlayerGraph, MAX_NODES_COUNT};

use super::HEURISTIC_SCORE;

const OPEN_PATH_LENGTH: usize = 2;

type Visited = SmallVec<[bool; MAX_NODES_COUNT]>;

/// Scores a non-terminal position from `maximizer`'s point of view: `+HEURISTIC_SCORE`
/// if the opponent holds more open completions than `maximizer`, otherwise
/// `-HEURISTIC_SCORE`. Ties go against the maximizer.
pub fn score(state: &GraphState, maximizer: Player) -> i16 {
    let own = open_completions(state.graph(maximizer), state.combined());
    let opponent = open_completions(state.graph(maximizer.opponent()), state.combined());

    if opponent > own {
        HEURISTIC_SCORE
    } else {
        -HEURISTIC_SCORE
    }
}

/// Counts the open completions in `graph`. Every path is found once from each of
/// its two ends, so the result is twice the number of distinct paths.
pub fn open_completions(graph: &PlayerGraph, combined: &CombinedState) -> usize {
    let mut visited: Visited = SmallVec::from_elem(false, graph.nodes_count());
    (0..graph.nodes_count())
        .map(|start| count_open_paths(graph, combined, &mut visited, OPEN_PATH_LENGTH, start, start))
        .sum()
}

fn count_open_paths(
    graph: &PlayerGraph,
    combined: &CombinedState,
    visited: &mut [bool],
    remaining: usize,
    current: usize,
    start: usize,
) -> usize {
    if remaining == 0 {
        return if combined.contains(current, start) { 0 } else { 1 };
    }

    visited[current] = true;
    let mut count = 0;
    for &next in graph.neighbours(current) {
        if !visited[next] {
            count += count_open_paths(graph, combined, visited, remaining - 1, next, start);
        }
    }
    visited[current] = false;

    count
}
