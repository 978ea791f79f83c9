use crate::graph::{GraphState, Player};

pub mod heuristic;
pub mod triangle;

pub use heuristic::{open_completions, score};
pub use triangle::{completes_triangle, has_triangle};

// Scores are kept in half-point units so the ±0.5 horizon estimate stays integral.
// A decided game (someone closed a triangle) is worth ±1, a horizon estimate ±0.5,
// and a drawn board 0.
pub const TRIANGLE_SCORE: i16 = 2;
pub const HEURISTIC_SCORE: i16 = 1;
pub const DRAW_SCORE: i16 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    /// The opponent of `winner` closed a triangle in their own color.
    Win { winner: Player },
    /// Every edge is colored and neither player has a triangle. Only possible
    /// on fewer than six nodes.
    Draw,
}

impl GameEnding {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameEnding::Win { winner } => Some(*winner),
            GameEnding::Draw => None,
        }
    }
}

/// Returns true if `player` has closed a triangle in their own edges.
#[inline]
pub fn player_has_lost(state: &GraphState, player: Player) -> bool {
    has_triangle(state.graph(player))
}

/// Returns the game ending state if the game has ended, otherwise returns None.
pub fn game_ending(state: &GraphState) -> Option<GameEnding> {
    for &player in Player::ALL.iter() {
        if player_has_lost(state, player) {
            return Some(GameEnding::Win {
                winner: player.opponent(),
            });
        }
    }

    if !state.has_legal_moves() {
        return Some(GameEnding::Draw);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use crate::sim_position;

    #[test]
    fn test_no_ending_on_an_open_board() {
        let state = sim_position!(6; human: [0-1, 1-2]; engine: [0-2]);
        assert_eq!(game_ending(&state), None);
    }

    #[test]
    fn test_triangle_loses_for_its_owner() {
        let state = sim_position!(6; human: [0-1, 1-2, 0-2]; engine: [3-4]);
        assert_eq!(
            game_ending(&state),
            Some(GameEnding::Win {
                winner: Player::Engine
            })
        );

        let state = sim_position!(6; human: [3-4]; engine: [0-5, 4-5, 0-4]);
        assert_eq!(
            game_ending(&state).and_then(|ending| ending.winner()),
            Some(Player::Human)
        );
    }

    #[test]
    fn test_three_node_board_ends_in_a_draw() {
        let state = sim_position!(3; human: [0-1, 1-2]; engine: [0-2]);
        assert_eq!(game_ending(&state), Some(GameEnding::Draw));
        assert_eq!(GameEnding::Draw.winner(), None);
    }

    #[test]
    fn test_five_nodes_can_be_colored_without_a_triangle() {
        // The pentagon and the pentagram are both triangle-free.
        let state = sim_position!(5;
            human: [0-1, 1-2, 2-3, 3-4, 0-4];
            engine: [0-2, 2-4, 1-4, 1-3, 0-3]);
        assert!(!state.has_legal_moves());
        assert_eq!(game_ending(&state), Some(GameEnding::Draw));
    }

    #[test]
    fn test_six_nodes_never_end_in_a_draw() {
        // Exhaustive over all 2^15 colorings of K6.
        let all_edges: Vec<Edge> = GraphState::new(6).unwrap().legal_moves().to_vec();
        for mask in 0u32..(1 << all_edges.len()) {
            let mut state = GraphState::new(6).unwrap();
            for (i, &edge) in all_edges.iter().enumerate() {
                let player = if mask & (1 << i) == 0 {
                    Player::Human
                } else {
                    Player::Engine
                };
                state.commit_move(player, edge).unwrap();
            }
            assert!(
                matches!(game_ending(&state), Some(GameEnding::Win { .. })),
                "a full coloring of K6 must contain a monochromatic triangle:\n{}",
                state
            );
        }
    }
}
