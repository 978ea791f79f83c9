//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Minimax over alternating max and min nodes, where the maximizer is the side the
//! search is choosing a move for. Each node is told which side just moved into it
//! and with which move, and first asks that move whether it lost the game for the
//! mover: in a max node that means the minimizer just lost, in a min node that the
//! maximizer did. Positions at the depth limit are scored by the `Evaluator`.
//!
//! Alpha-beta pruning keeps a window [alpha, beta] of scores that can still change
//! the decision at the root. A max node stops as soon as its value reaches beta and
//! a min node as soon as its value falls to alpha. Values are fail-soft: a node that
//! is cut off returns the bound it reached rather than the window edge.
//!
//! # Move Ordering
//!
//! Moves are searched in the order the `MoveGenerator` returns them. At the root the
//! first move that strictly improves alpha is kept, so among equally scored moves
//! the earliest one wins and the result is deterministic.
//!
//! # Speculative Moves
//!
//! The search works on a single state. Every move is applied through a
//! `Speculation` guard that undoes it when dropped, so the state handed to
//! `alpha_beta_search` is returned exactly as it came in, cutoffs included.
//!
//! # Move Time
//!
//! A `SearchContext` can carry a move-time budget, checked at every node. Once it is
//! spent, nodes are scored by the `Evaluator` as if they sat on the horizon and
//! every node returns the best value found so far. The root then stops and keeps
//! the best move among the root moves it finished, or the first move if it did not
//! finish any. Without a budget the search always runs to completion.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use super::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, Speculation};

const NEG_INFINITY: i16 = i16::MIN;
const INFINITY: i16 = i16::MAX;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

/// Search configuration parameters.
struct SearchConfig {
    depth: u8,
    move_time: Option<Duration>,
}

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    cutoff_count: usize,
    last_score: Option<i16>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: i16, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

/// Configuration and statistics for a searcher. Holds nothing that the recursion
/// reads back, so a context can be reused for any number of searches.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(depth: u8) -> Self {
        Self::with_move_time(depth, None)
    }

    pub fn with_move_time(depth: u8, move_time: Option<Duration>) -> Self {
        Self {
            config: SearchConfig { depth, move_time },
            stats: SearchStats::default(),
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.config.move_time
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoff_count
    }

    /// Root score of the last completed search, from the maximizer's point of view.
    pub fn last_score(&self) -> Option<i16> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

/// Searches for the best move for the opponent of `root_mover`, the side that made
/// the last move in `state`.
///
/// # Returns
///
/// - `Ok(best_move)` - The first move, in generation order, with the best score
/// - `Err(SearchError::DepthTooLow)` - If search depth is < 1
/// - `Err(SearchError::NoAvailableMoves)` - If no legal moves available
#[must_use = "search returns the best move found"]
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &mut S,
    root_mover: S::Side,
    move_generator: &G,
    evaluator: &E,
) -> Result<G::Move, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    debug!("alpha-beta search depth: {}", context.search_depth());
    let max_depth = context.search_depth();

    if max_depth < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();
    let deadline = context.move_time().map(|move_time| start + move_time);

    let candidates = move_generator.generate_moves(state);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let maximizer = S::opponent(root_mover);
    let mut search = NodeSearch {
        stats: &mut context.stats,
        move_generator,
        evaluator,
        maximizer,
        max_depth,
        deadline,
        timed_out: false,
    };

    let mut alpha = NEG_INFINITY;
    let beta = INFINITY;
    let mut value = NEG_INFINITY;
    let mut best_move = None;

    for game_move in candidates.as_ref().iter() {
        if search.out_of_time() && best_move.is_some() {
            debug!("move time spent, keeping best move so far");
            break;
        }

        let score = {
            let mut child = speculate(state, game_move, maximizer);
            search.min_node(&mut *child, game_move, maximizer, 1, alpha, beta)
        };
        if search.timed_out && best_move.is_some() {
            debug!("move time spent during {:?}, discarding its partial score", game_move);
            break;
        }
        debug!("root move {:?} scored {}", game_move, score);

        value = max(value, score);
        if value > alpha {
            alpha = value;
            best_move = Some(game_move.clone());
        }
    }

    let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
    context.stats.record_result(value, start.elapsed());
    debug!(
        "searched {} positions ({} cutoffs), best move {:?} scored {}",
        context.searched_position_count(),
        context.cutoff_count(),
        best_move,
        value
    );

    Ok(best_move)
}

/// Applies a move for the lifetime of the returned guard.
fn speculate<'a, M: GameMove>(
    state: &'a mut M::State,
    game_move: &'a M,
    side: <M::State as GameState>::Side,
) -> Speculation<'a, M> {
    Speculation::apply(state, game_move, side)
        .expect("move application should succeed in search")
}

/// The parts of a search that stay fixed while the tree is walked. Everything
/// that changes from node to node is passed as an argument.
struct NodeSearch<'a, S: GameState, G, E> {
    stats: &'a mut SearchStats,
    move_generator: &'a G,
    evaluator: &'a E,
    maximizer: S::Side,
    max_depth: u8,
    deadline: Option<Instant>,
    /// Latches once the deadline has passed.
    timed_out: bool,
}

impl<'a, S, G, E> NodeSearch<'a, S, G, E>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    fn out_of_time(&mut self) -> bool {
        if !self.timed_out {
            self.timed_out = self
                .deadline
                .map_or(false, |deadline| Instant::now() >= deadline);
        }
        self.timed_out
    }

    /// A position the minimizer (`mover`) just moved into with `last_move`.
    fn max_node(
        &mut self,
        state: &mut S,
        last_move: &G::Move,
        mover: S::Side,
        depth: u8,
        mut alpha: i16,
        beta: i16,
    ) -> i16 {
        self.stats.position_count += 1;

        if last_move.loses(state, mover) {
            return self.evaluator.loss_score();
        }

        if depth == self.max_depth || self.out_of_time() {
            return self.evaluator.evaluate(state, self.maximizer);
        }

        let candidates = self.move_generator.generate_moves(state);
        if candidates.is_empty() {
            return self.evaluator.draw_score();
        }

        let next_mover = S::opponent(mover);
        let mut value = NEG_INFINITY;

        for game_move in candidates.as_ref().iter() {
            let score = {
                let mut child = speculate(state, game_move, next_mover);
                self.min_node(&mut *child, game_move, next_mover, depth + 1, alpha, beta)
            };

            value = max(value, score);
            if value >= beta {
                self.stats.cutoff_count += 1;
                return value;
            }
            if self.timed_out {
                return value;
            }
            alpha = max(alpha, value);
        }

        value
    }

    /// A position the maximizer (`mover`) just moved into with `last_move`.
    fn min_node(
        &mut self,
        state: &mut S,
        last_move: &G::Move,
        mover: S::Side,
        depth: u8,
        alpha: i16,
        mut beta: i16,
    ) -> i16 {
        self.stats.position_count += 1;

        if last_move.loses(state, mover) {
            return -self.evaluator.loss_score();
        }

        if depth == self.max_depth || self.out_of_time() {
            return self.evaluator.evaluate(state, self.maximizer);
        }

        let candidates = self.move_generator.generate_moves(state);
        if candidates.is_empty() {
            return self.evaluator.draw_score();
        }

        let next_mover = S::opponent(mover);
        let mut value = INFINITY;

        for game_move in candidates.as_ref().iter() {
            let score = {
                let mut child = speculate(state, game_move, next_mover);
                self.max_node(&mut *child, game_move, next_mover, depth + 1, alpha, beta)
            };

            value = min(value, score);
            if value <= alpha {
                self.stats.cutoff_count += 1;
                return value;
            }
            if self.timed_out {
                return value;
            }
            beta = min(beta, value);
        }

        value
    }
}
