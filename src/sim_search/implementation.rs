//! Sim-specific trait implementations for the alpha-beta search.

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, SearchContext, SearchError,
};
use crate::evaluate::{self, completes_triangle, TRIANGLE_SCORE};
use crate::graph::{Edge, EdgeList, GraphError, GraphState, Player};

impl GameState for GraphState {
    type Side = Player;

    #[inline]
    fn opponent(side: Player) -> Player {
        side.opponent()
    }
}

impl GameMove for Edge {
    type State = GraphState;
    type Error = GraphError;

    #[inline]
    fn apply(&self, state: &mut GraphState, side: Player) -> Result<(), GraphError> {
        state.apply_speculative(side, *self)
    }

    #[inline]
    fn undo(&self, state: &mut GraphState, side: Player) -> Result<(), GraphError> {
        state.undo_speculative(side, *self)
    }

    /// A move loses when it closes a triangle in the mover's color. Every position
    /// the search expands is triangle-free, so only triangles through this edge
    /// need to be looked for.
    #[inline]
    fn loses(&self, state: &GraphState, side: Player) -> bool {
        completes_triangle(state.graph(side), *self)
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct SimMoveGenerator;

impl MoveGenerator<GraphState> for SimMoveGenerator {
    type Move = Edge;
    type MoveList = EdgeList;

    #[inline]
    fn generate_moves(&self, state: &GraphState) -> EdgeList {
        state.legal_moves()
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct HeuristicEvaluator;

impl Evaluator<GraphState> for HeuristicEvaluator {
    #[inline]
    fn evaluate(&self, state: &GraphState, maximizer: Player) -> i16 {
        evaluate::score(state, maximizer)
    }

    #[inline]
    fn loss_score(&self) -> i16 {
        TRIANGLE_SCORE
    }
}

/// Searches for the best reply to `root_mover`'s last move. The returned edge is
/// the move for `root_mover.opponent()`; `state` is left exactly as it was.
#[must_use = "search returns the best move found"]
pub fn compute_best_move(
    context: &mut SearchContext,
    state: &mut GraphState,
    root_mover: Player,
) -> Result<Edge, SearchError> {
    alpha_beta_search(
        context,
        state,
        root_mover,
        &SimMoveGenerator,
        &HeuristicEvaluator,
    )
}
