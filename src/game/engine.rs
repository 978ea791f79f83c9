use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::evaluate::{self, GameEnding};
use crate::graph::{Edge, GraphError, GraphState, Player, PRACTICAL_MIN_NODES_COUNT};
use crate::sim_search::compute_best_move;

use super::difficulty::Difficulty;
use super::registry::MatchHandle;

/// Core engine configuration
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub nodes_count: usize,
    pub difficulty: Difficulty,
    /// Overrides the depth implied by `difficulty`.
    pub search_depth: Option<u8>,
    /// Root move-time budget; `None` searches to full depth.
    pub move_time: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            nodes_count: PRACTICAL_MIN_NODES_COUNT,
            difficulty: Difficulty::default(),
            search_depth: None,
            move_time: None,
        }
    }
}

impl EngineConfig {
    pub fn new(nodes_count: usize, difficulty: Difficulty) -> Self {
        Self {
            nodes_count,
            difficulty,
            ..Self::default()
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
            .unwrap_or_else(|| self.difficulty.search_depth())
    }
}

/// Match state and runtime info
#[derive(Clone)]
struct MatchState {
    graph: GraphState,
    move_history: Vec<(Player, Edge)>,
    last_score: Option<i16>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid move: {edge} is already colored")]
    InvalidMove { edge: Edge },
    #[error("The game is already over")]
    GameOver,
    #[error("Unknown match {handle}")]
    UnknownMatch { handle: MatchHandle },
    #[error("Graph error: {error}")]
    GraphError { error: GraphError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// The result of offering a human move to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub edge: Edge,
    /// False when the edge was already colored. A rejected move changes nothing.
    pub accepted: bool,
}

/// One Sim match: the board, the move history, and the searcher that plays the
/// engine's side.
pub struct Engine {
    config: EngineConfig,
    state: MatchState,
    search_context: SearchContext,
}

impl Engine {
    pub fn new(nodes_count: usize, difficulty: Difficulty) -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::new(nodes_count, difficulty))
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let graph = GraphState::new(config.nodes_count)
            .map_err(|error| EngineError::GraphError { error })?;
        let search_context = SearchContext::with_move_time(config.search_depth(), config.move_time);

        info!(
            "new match on {} nodes at {} (depth {})",
            config.nodes_count,
            config.difficulty,
            config.search_depth()
        );

        Ok(Self {
            config,
            state: MatchState {
                graph,
                move_history: Vec::new(),
                last_score: None,
            },
            search_context,
        })
    }

    pub fn graph(&self) -> &GraphState {
        &self.state.graph
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.search_depth = Some(depth);
        self.search_context.set_search_depth(depth);
    }

    pub fn move_history(&self) -> &[(Player, Edge)] {
        &self.state.move_history
    }

    pub fn last_move(&self) -> Option<(Player, Edge)> {
        self.state.move_history.last().copied()
    }

    /// Returns true if `{a, b}` is a free edge of this match's graph.
    pub fn is_valid_move(&self, a: usize, b: usize) -> Result<bool, EngineError> {
        self.state
            .graph
            .is_valid_move(a, b)
            .map_err(|error| EngineError::GraphError { error })
    }

    pub fn game_ending(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.state.graph)
    }

    /// Returns true once `player` has closed a triangle of their own, or once the
    /// board is full. A full board without a triangle is over for both players, so
    /// `true` alone does not mean `player` lost: use `game_ending` to tell a win
    /// from a draw.
    pub fn is_over(&self, player: Player) -> bool {
        evaluate::player_has_lost(&self.state.graph, player) || !self.state.graph.has_legal_moves()
    }

    /// Offers the human's move `{a, b}`. A colored edge is rejected with
    /// `accepted: false` and the match is left untouched.
    pub fn commit_human_move(&mut self, a: usize, b: usize) -> Result<MoveOutcome, EngineError> {
        self.ensure_in_progress()?;
        let edge = self
            .state
            .graph
            .edge(a, b)
            .map_err(|error| EngineError::GraphError { error })?;

        match self.commit_move(Player::Human, edge) {
            Ok(()) => Ok(MoveOutcome {
                edge,
                accepted: true,
            }),
            Err(EngineError::InvalidMove { edge }) => Ok(MoveOutcome {
                edge,
                accepted: false,
            }),
            Err(error) => Err(error),
        }
    }

    /// Colors `edge` for `player`, regardless of whose turn it would be.
    pub fn commit_move(&mut self, player: Player, edge: Edge) -> Result<(), EngineError> {
        self.ensure_in_progress()?;
        if self.state.graph.owner(edge).is_some() {
            warn!("{} tried to color {}, which is already colored", player, edge);
            return Err(EngineError::InvalidMove { edge });
        }

        self.state
            .graph
            .commit_move(player, edge)
            .map_err(|error| EngineError::GraphError { error })?;
        self.state.move_history.push((player, edge));
        info!("{} colored {}", player, edge);
        Ok(())
    }

    /// Searches for `player`'s best move without playing it.
    pub fn best_move_for(&mut self, player: Player) -> Result<Edge, EngineError> {
        self.ensure_in_progress()?;

        let best_move = compute_best_move(
            &mut self.search_context,
            &mut self.state.graph,
            player.opponent(),
        )
        .map_err(|error| EngineError::SearchError { error })?;
        self.state.last_score = self.search_context.last_score();

        debug!(
            "best move for {}: {} (score {:?}, {} positions)",
            player,
            best_move,
            self.state.last_score,
            self.search_context.searched_position_count()
        );
        Ok(best_move)
    }

    /// Searches for `player`'s best move and plays it.
    pub fn make_best_move(&mut self, player: Player) -> Result<Edge, EngineError> {
        let best_move = self.best_move_for(player)?;
        self.commit_move(player, best_move)?;
        Ok(best_move)
    }

    /// Plays the engine's reply to the human's last move.
    pub fn compute_and_commit_engine_move(&mut self) -> Result<Edge, EngineError> {
        self.make_best_move(Player::Engine)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            depth: self.search_context.search_depth(),
            last_score: self.state.last_score,
            last_search_duration: self.search_context.last_search_duration(),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.game_ending().is_some() {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<i16>,
    pub last_search_duration: Option<Duration>,
}
