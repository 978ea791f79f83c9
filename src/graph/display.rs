use std::fmt;

use super::{GraphState, Player};

impl fmt::Display for GraphState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for player in Player::ALL.iter().copied() {
            let edges: Vec<String> = self
                .graph(player)
                .edges()
                .iter()
                .map(|edge| edge.to_string())
                .collect();
            writeln!(f, "{:>7}: {}", player.to_string(), edges.join(" "))?;
        }

        let free: Vec<String> = self
            .legal_moves()
            .iter()
            .map(|edge| edge.to_string())
            .collect();
        write!(f, "{:>7}: {}", "free", free.join(" "))
    }
}

/// Builds a `GraphState` from edge lists, e.g.
/// `sim_position!(6; human: [0-1, 1-2]; engine: [2-3])`.
#[macro_export]
macro_rules! sim_position {
    ($nodes:expr; human: [$($ha:literal - $hb:literal),* $(,)?]; engine: [$($ea:literal - $eb:literal),* $(,)?]) => {{
        let mut state = $crate::graph::GraphState::new($nodes).unwrap();
        $(
            let edge = $crate::graph::Edge::new($ha, $hb).unwrap();
            state.commit_move($crate::graph::Player::Human, edge).unwrap();
        )*
        $(
            let edge = $crate::graph::Edge::new($ea, $eb).unwrap();
            state.commit_move($crate::graph::Player::Engine, edge).unwrap();
        )*
        state
    }};
}
