//! Handle-based access to any number of independent matches.

use std::fmt;
use std::time::Duration;

use log::info;
use rustc_hash::FxHashMap;

use crate::evaluate::GameEnding;
use crate::graph::{Edge, Player};

use super::difficulty::Difficulty;
use super::engine::{Engine, EngineConfig, EngineError, MoveOutcome};

/// Identifies a match created by a `MatchRegistry`. Handles are never reused.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub struct MatchHandle(u64);

impl MatchHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Default)]
pub struct MatchRegistry {
    matches: FxHashMap<MatchHandle, Engine>,
    next_handle: u64,
    move_time: Option<Duration>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every match created afterwards gets this root move-time budget.
    pub fn with_move_time(move_time: Option<Duration>) -> Self {
        Self {
            move_time,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn create_match(
        &mut self,
        nodes_count: usize,
        difficulty: Difficulty,
    ) -> Result<MatchHandle, EngineError> {
        let engine = Engine::with_config(EngineConfig {
            move_time: self.move_time,
            ..EngineConfig::new(nodes_count, difficulty)
        })?;

        let handle = MatchHandle(self.next_handle);
        self.next_handle += 1;
        self.matches.insert(handle, engine);
        info!("created match {}", handle);
        Ok(handle)
    }

    pub fn engine(&self, handle: MatchHandle) -> Result<&Engine, EngineError> {
        self.matches
            .get(&handle)
            .ok_or(EngineError::UnknownMatch { handle })
    }

    pub fn engine_mut(&mut self, handle: MatchHandle) -> Result<&mut Engine, EngineError> {
        self.matches
            .get_mut(&handle)
            .ok_or(EngineError::UnknownMatch { handle })
    }

    pub fn is_valid_move(
        &self,
        handle: MatchHandle,
        a: usize,
        b: usize,
    ) -> Result<bool, EngineError> {
        self.engine(handle)?.is_valid_move(a, b)
    }

    pub fn commit_human_move(
        &mut self,
        handle: MatchHandle,
        a: usize,
        b: usize,
    ) -> Result<MoveOutcome, EngineError> {
        self.engine_mut(handle)?.commit_human_move(a, b)
    }

    /// See `Engine::is_over`. A drawn board is over for both players.
    pub fn is_over(&self, handle: MatchHandle, player: Player) -> Result<bool, EngineError> {
        Ok(self.engine(handle)?.is_over(player))
    }

    pub fn compute_and_commit_engine_move(
        &mut self,
        handle: MatchHandle,
    ) -> Result<Edge, EngineError> {
        self.engine_mut(handle)?.compute_and_commit_engine_move()
    }

    pub fn game_ending(&self, handle: MatchHandle) -> Result<Option<GameEnding>, EngineError> {
        Ok(self.engine(handle)?.game_ending())
    }

    /// Drops the match. Its handle is unknown from then on.
    pub fn end_match(&mut self, handle: MatchHandle) -> Result<(), EngineError> {
        self.matches
            .remove(&handle)
            .map(|_| info!("ended match {}", handle))
            .ok_or(EngineError::UnknownMatch { handle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_distinct() {
        let mut registry = MatchRegistry::new();
        let first = registry.create_match(6, Difficulty::Low).unwrap();
        let second = registry.create_match(7, Difficulty::High).unwrap();

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.engine(second).unwrap().graph().nodes_count(), 7);
        assert_eq!(
            registry.engine(second).unwrap().difficulty(),
            Difficulty::High
        );
    }

    #[test]
    fn test_matches_are_independent() {
        let mut registry = MatchRegistry::new();
        let first = registry.create_match(6, Difficulty::Low).unwrap();
        let second = registry.create_match(6, Difficulty::Low).unwrap();

        let outcome = registry.commit_human_move(first, 0, 1).unwrap();

        assert!(outcome.accepted);
        assert_eq!(registry.is_valid_move(first, 0, 1), Ok(false));
        assert_eq!(registry.is_valid_move(second, 0, 1), Ok(true));
    }

    #[test]
    fn test_full_exchange() {
        let mut registry = MatchRegistry::new();
        let handle = registry.create_match(6, Difficulty::Low).unwrap();
        registry
            .engine_mut(handle)
            .unwrap()
            .set_search_depth(2);

        assert!(registry.commit_human_move(handle, 2, 4).unwrap().accepted);
        assert_eq!(registry.is_over(handle, Player::Human), Ok(false));

        let reply = registry.compute_and_commit_engine_move(handle).unwrap();
        assert_eq!(registry.is_valid_move(handle, reply.low(), reply.high()), Ok(false));
        assert_eq!(registry.is_over(handle, Player::Engine), Ok(false));
        assert_eq!(registry.game_ending(handle), Ok(None));
    }

    #[test]
    fn test_unknown_and_ended_matches() {
        let mut registry = MatchRegistry::new();
        let handle = registry.create_match(6, Difficulty::Middle).unwrap();

        registry.end_match(handle).unwrap();

        assert!(registry.is_empty());
        assert_eq!(
            registry.is_valid_move(handle, 0, 1),
            Err(EngineError::UnknownMatch { handle })
        );
        assert_eq!(
            registry.end_match(handle),
            Err(EngineError::UnknownMatch { handle })
        );

        let next = registry.create_match(6, Difficulty::Middle).unwrap();
        assert_ne!(next, handle);
    }

    #[test]
    fn test_invalid_node_count_creates_nothing() {
        let mut registry = MatchRegistry::new();
        assert!(registry.create_match(65, Difficulty::Low).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_handle_display() {
        let mut registry = MatchRegistry::new();
        let handle = registry.create_match(6, Difficulty::Low).unwrap();
        assert_eq!(handle.to_string(), format!("#{}", handle.id()));
    }
}
