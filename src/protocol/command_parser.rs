//! Protocol command parsing from stdin

use std::str::FromStr;

use crate::game::Difficulty;

/// Commands a client can send
#[derive(Debug, PartialEq, Clone)]
pub enum SimCommand {
    /// Start over and ask for a level
    NewGame,
    /// Create a match on `nodes_count` nodes
    Level {
        nodes_count: usize,
        difficulty: Difficulty,
    },
    /// The human colors the edge between `start` and `end`
    PlayerMove { start: usize, end: usize },
    /// End the session
    Quit,
    /// Unknown or unimplemented command
    Unknown(String),
}

impl FromStr for SimCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(SimCommand::Unknown(String::new()));
        }

        let parts: Vec<&str> = s.split_whitespace().collect();
        let command = parts[0].to_lowercase();

        match command.as_str() {
            "quit" => Ok(SimCommand::Quit),

            "new" => match parts.get(1).map(|part| part.to_lowercase()) {
                Some(ref game) if game == "game" && parts.len() == 2 => Ok(SimCommand::NewGame),
                _ => Ok(SimCommand::Unknown(s.to_string())),
            },

            "level" => parse_level_command(&parts[1..]),

            "player" => match parts.get(1).map(|part| part.to_lowercase()) {
                Some(ref word) if word == "move" => parse_player_move_command(&parts[2..]),
                _ => Ok(SimCommand::Unknown(s.to_string())),
            },

            _ => Ok(SimCommand::Unknown(s.to_string())),
        }
    }
}

fn parse_level_command(parts: &[&str]) -> Result<SimCommand, String> {
    if parts.len() != 2 {
        return Err("level requires a node count and a difficulty".to_string());
    }

    let nodes_count = parts[0]
        .parse::<usize>()
        .map_err(|_| format!("invalid node count: {}", parts[0]))?;
    let difficulty = parts[1]
        .parse::<Difficulty>()
        .map_err(|error| error.to_string())?;

    Ok(SimCommand::Level {
        nodes_count,
        difficulty,
    })
}

fn parse_player_move_command(parts: &[&str]) -> Result<SimCommand, String> {
    if parts.len() != 2 {
        return Err("player move requires a start and an end node".to_string());
    }

    let start = parse_node(parts[0])?;
    let end = parse_node(parts[1])?;
    Ok(SimCommand::PlayerMove { start, end })
}

fn parse_node(part: &str) -> Result<usize, String> {
    part.parse::<usize>()
        .map_err(|_| format!("invalid node: {}", part))
}
