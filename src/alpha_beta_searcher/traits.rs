//! Core traits for generic alpha-beta search.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use smallvec::{Array, SmallVec};

/// Represents the state of a two-player game. The side to move is tracked by the
/// search, so the state only needs to know how to name the two sides.
pub trait GameState {
    type Side: Copy + PartialEq + Debug;

    fn opponent(side: Self::Side) -> Self::Side;
}

/// Represents an action that can be applied to and undone from a game state.
pub trait GameMove: Clone + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Applies this move to the given state on behalf of `side`.
    fn apply(
        &self,
        state: &mut Self::State,
        side: <Self::State as GameState>::Side,
    ) -> Result<(), Self::Error>;

    /// Undoes this move on the given state. Must be the most recently applied move.
    fn undo(
        &self,
        state: &mut Self::State,
        side: <Self::State as GameState>::Side,
    ) -> Result<(), Self::Error>;

    /// Returns true if `side` lost the game by playing this move. The move has
    /// already been applied to `state`.
    fn loses(&self, state: &Self::State, side: <Self::State as GameState>::Side) -> bool;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState> {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates the legal moves in the order the search should try them.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Evaluates a game position that the search will not expand any further.
pub trait Evaluator<S: GameState> {
    /// Evaluates a position at the search horizon. Higher scores favor `maximizer`.
    fn evaluate(&self, state: &S, maximizer: S::Side) -> i16;

    /// Magnitude of the score of a decided game. Must exceed every value
    /// `evaluate` can return.
    fn loss_score(&self) -> i16;

    /// Score of a position with no legal moves in which nobody has lost.
    fn draw_score(&self) -> i16 {
        0
    }
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M> MoveCollection<M> for Vec<M> {}

impl<A: Array> MoveCollection<A::Item> for SmallVec<A> {}

/// A move applied to a state for as long as the guard lives. Dropping the guard
/// undoes the move, so nested speculations unwind in reverse order of
/// application on every path out of the scope that created them, early returns
/// included.
pub struct Speculation<'a, M: GameMove> {
    state: &'a mut M::State,
    game_move: &'a M,
    side: <M::State as GameState>::Side,
}

impl<'a, M: GameMove> Speculation<'a, M> {
    pub fn apply(
        state: &'a mut M::State,
        game_move: &'a M,
        side: <M::State as GameState>::Side,
    ) -> Result<Self, M::Error> {
        game_move.apply(state, side)?;
        Ok(Self {
            state,
            game_move,
            side,
        })
    }

    pub fn game_move(&self) -> &M {
        self.game_move
    }

    pub fn side(&self) -> <M::State as GameState>::Side {
        self.side
    }
}

impl<'a, M: GameMove> Deref for Speculation<'a, M> {
    type Target = M::State;

    fn deref(&self) -> &M::State {
        self.state
    }
}

impl<'a, M: GameMove> DerefMut for Speculation<'a, M> {
    fn deref_mut(&mut self) -> &mut M::State {
        self.state
    }
}

impl<'a, M: GameMove> Drop for Speculation<'a, M> {
    fn drop(&mut self) {
        self.game_move
            .undo(self.state, self.side)
            .expect("speculative moves are undone in reverse order of application");
    }
}
