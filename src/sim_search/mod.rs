//! Sim-specific implementation of the alpha-beta search traits.

pub mod implementation;


pub use implementation::{compute_best_move, HeuristicEvaluator, SimMoveGenerator};
