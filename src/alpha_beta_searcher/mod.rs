//! Generic depth-bounded minimax search with alpha-beta pruning, for two-player
//! games where a move can lose the game for the player who makes it.

mod search;
mod traits;


pub use search::{alpha_beta_search, SearchContext, SearchError};
pub use traits::{Evaluator, GameMove, GameState, MoveCollection, MoveGenerator, Speculation};
