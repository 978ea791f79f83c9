//! Protocol response formatting for stdout

use crate::evaluate::GameEnding;
use crate::game::Difficulty;
use crate::graph::Edge;

/// Format protocol responses to send to stdout
pub struct SimResponseFormatter;

impl SimResponseFormatter {
    /// Format the 'new game' response, listing the levels hardest first
    pub fn format_choose_level() -> String {
        let levels: Vec<String> = Difficulty::ALL
            .iter()
            .map(|difficulty| difficulty.to_string())
            .collect();
        format!("choose level {}", levels.join(" "))
    }

    /// Format the 'level' response with the node count actually used
    pub fn format_draw_field(nodes_count: usize) -> String {
        format!("draw field {}", nodes_count)
    }

    pub fn format_move_validity(valid: bool, start: usize, end: usize) -> String {
        format!("is valid move {} {} {}", valid, start, end)
    }

    pub fn format_bot_move(edge: Edge) -> String {
        format!("bot move {} {}", edge.low(), edge.high())
    }

    /// Format the end of a match with the winner's player id, or `draw`
    pub fn format_game_over(ending: GameEnding) -> String {
        match ending.winner() {
            Some(winner) => format!("game over {}", winner.id()),
            None => "game over draw".to_string(),
        }
    }

    pub fn format_error(message: &str) -> String {
        format!("error {}", message)
    }
}
