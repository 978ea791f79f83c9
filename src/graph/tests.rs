use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;
use crate::sim_position;

fn edge(a: usize, b: usize) -> Edge {
    Edge::new(a, b).unwrap()
}

/// Rebuilds the combined view from scratch, to compare against the incrementally
/// maintained one.
fn union_of_player_graphs(state: &GraphState) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Player::ALL
        .iter()
        .flat_map(|&player| state.graph(player).edges().into_iter())
        .collect();
    edges.sort();
    edges
}

fn combined_edges(state: &GraphState) -> Vec<Edge> {
    let n = state.nodes_count();
    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            if state.combined().contains(a, b) {
                edges.push(edge(a, b));
            }
        }
    }
    edges
}

fn assert_invariants(state: &GraphState) {
    for candidate in combined_edges(state) {
        let owners = Player::ALL
            .iter()
            .filter(|&&player| state.graph(player).contains_edge(candidate))
            .count();
        assert_eq!(owners, 1, "edge {} must have exactly one owner", candidate);
    }
    assert_eq!(union_of_player_graphs(state), combined_edges(state));
    assert_eq!(
        state.combined().colored_count(),
        state.graph(Player::Human).edge_count() + state.graph(Player::Engine).edge_count()
    );
}

#[test]
fn test_new_rejects_invalid_node_counts() {
    assert!(matches!(
        GraphState::new(2),
        Err(GraphError::InvalidNodeCount { nodes_count: 2, .. })
    ));
    assert!(GraphState::new(MAX_NODES_COUNT + 1).is_err());
    assert!(GraphState::new(MIN_NODES_COUNT).is_ok());
}

#[test]
fn test_is_valid_move() {
    let state = sim_position!(6; human: [0-1]; engine: [1-2]);

    assert!(!state.is_valid_move(0, 1).unwrap());
    assert!(!state.is_valid_move(1, 0).unwrap());
    assert!(!state.is_valid_move(2, 1).unwrap());
    assert!(state.is_valid_move(0, 2).unwrap());
}

#[test]
fn test_is_valid_move_rejects_out_of_range_nodes() {
    let state = GraphState::new(6).unwrap();

    assert_eq!(
        state.is_valid_move(0, 6),
        Err(GraphError::NodeOutOfRange {
            node: 6,
            nodes_count: 6
        })
    );
    assert_eq!(
        state.is_valid_move(9, 1),
        Err(GraphError::NodeOutOfRange {
            node: 9,
            nodes_count: 6
        })
    );
    assert_eq!(state.is_valid_move(2, 2), Err(GraphError::SelfLoop { node: 2 }));
}

#[test]
fn test_commit_move_rejects_colored_edges_without_mutation() {
    let mut state = sim_position!(6; human: [0-1]; engine: []);
    let before = state.clone();

    assert_eq!(
        state.commit_move(Player::Engine, edge(0, 1)),
        Err(GraphError::EdgeAlreadyColored { edge: edge(0, 1) })
    );
    assert_eq!(
        state.commit_move(Player::Human, edge(1, 0)),
        Err(GraphError::EdgeAlreadyColored { edge: edge(0, 1) })
    );
    assert_eq!(state, before);
}

#[test]
fn test_commit_move_rejects_edges_outside_the_graph() {
    let mut state = GraphState::new(4).unwrap();
    let before = state.clone();

    assert!(matches!(
        state.commit_move(Player::Human, edge(1, 7)),
        Err(GraphError::NodeOutOfRange { node: 7, .. })
    ));
    assert_eq!(state, before);
}

#[test]
fn test_owner() {
    let state = sim_position!(5; human: [0-1]; engine: [3-4]);

    assert_eq!(state.owner(edge(0, 1)), Some(Player::Human));
    assert_eq!(state.owner(edge(3, 4)), Some(Player::Engine));
    assert_eq!(state.owner(edge(1, 2)), None);
}

#[test]
fn test_legal_moves_are_uncolored_edges_in_ascending_order() {
    let state = sim_position!(4; human: [0-2]; engine: [1-3]);
    let moves: Vec<String> = state.legal_moves().iter().map(|e| e.to_string()).collect();

    assert_eq!(moves, vec!["0-1", "0-3", "1-2", "2-3"]);
}

#[test]
fn test_legal_moves_of_an_empty_graph() {
    let state = GraphState::new(6).unwrap();
    let moves = state.legal_moves();

    assert_eq!(moves.len(), 15);
    assert_eq!(moves[0], edge(0, 1));
    assert_eq!(moves[14], edge(4, 5));
    assert!(moves.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_three_nodes_can_be_filled_without_a_legal_move_left() {
    let mut state = GraphState::new(3).unwrap();
    state.commit_move(Player::Human, edge(0, 1)).unwrap();
    state.commit_move(Player::Engine, edge(0, 2)).unwrap();
    assert!(state.has_legal_moves());

    state.commit_move(Player::Human, edge(1, 2)).unwrap();
    assert!(!state.has_legal_moves());
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_exclusivity_and_consistency_over_random_games() {
    let mut rng = StdRng::seed_from_u64(7);

    for nodes_count in 3..=9 {
        let mut state = GraphState::new(nodes_count).unwrap();
        let mut player = Player::Human;

        while state.has_legal_moves() {
            let moves = state.legal_moves();
            let chosen = *moves.choose(&mut rng).unwrap();

            // Coloring an owned edge for the other player must fail.
            if let Some(&colored) = union_of_player_graphs(&state).first() {
                assert!(state.commit_move(player, colored).is_err());
            }

            state.commit_move(player, chosen).unwrap();
            assert_invariants(&state);
            player = player.opponent();
        }

        assert_eq!(
            state.combined().colored_count(),
            state.combined().total_edge_count()
        );
    }
}

#[test]
fn test_speculative_moves_undone_in_reverse_order_restore_state() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let mut state = sim_position!(7; human: [0-1, 2-3]; engine: [1-2]);
        let before = state.clone();

        let mut applied = Vec::new();
        let mut player = Player::Human;
        let steps = rng.gen_range(1..=state.legal_moves().len());
        for _ in 0..steps {
            let chosen = *state.legal_moves().choose(&mut rng).unwrap();
            state.apply_speculative(player, chosen).unwrap();
            assert_invariants(&state);
            applied.push((player, chosen));
            player = player.opponent();
        }

        for (player, chosen) in applied.into_iter().rev() {
            state.undo_speculative(player, chosen).unwrap();
            assert_invariants(&state);
        }

        assert_eq!(state, before);
    }
}

#[test]
fn test_undo_out_of_order_is_rejected_without_corruption() {
    let mut state = GraphState::new(5).unwrap();
    state.apply_speculative(Player::Engine, edge(0, 1)).unwrap();
    state.apply_speculative(Player::Engine, edge(1, 2)).unwrap();
    let before = state.clone();

    assert_eq!(
        state.undo_speculative(Player::Engine, edge(0, 1)),
        Err(GraphError::UndoOutOfOrder { edge: edge(0, 1) })
    );
    assert_eq!(
        state.undo_speculative(Player::Human, edge(1, 2)),
        Err(GraphError::UndoOutOfOrder { edge: edge(1, 2) })
    );
    assert_eq!(state, before);
}

#[test]
fn test_display_lists_edges_per_player() {
    let state = sim_position!(3; human: [0-1]; engine: [1-2]);
    let rendered = state.to_string();

    assert!(rendered.contains("human: 0-1"));
    assert!(rendered.contains("engine: 1-2"));
    assert!(rendered.contains("free: 0-2"));
}
