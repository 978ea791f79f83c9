//! Shared utilities for CLI commands.

use std::str::FromStr;
use std::time::Duration;

use sim::game::{Difficulty, Engine, EngineConfig};
use sim::graph::{Edge, GraphError};
use structopt::StructOpt;

/// Engine options shared by every command that plays or searches.
#[derive(StructOpt)]
pub struct EngineArgs {
    #[structopt(short, long, default_value = "6")]
    pub nodes: usize,
    #[structopt(short = "l", long, default_value = "LOW")]
    pub difficulty: Difficulty,
    #[structopt(short, long, help = "Search depth in plies, overriding the difficulty")]
    pub depth: Option<u8>,
    #[structopt(long = "move-time", help = "Move time budget in milliseconds")]
    pub move_time_ms: Option<u64>,
}

impl EngineArgs {
    pub(crate) fn config(&self) -> EngineConfig {
        EngineConfig {
            search_depth: self.depth,
            move_time: self.move_time(),
            ..EngineConfig::new(self.nodes, self.difficulty)
        }
    }

    pub(crate) fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }
}

pub(crate) fn create_engine(config: EngineConfig) -> Option<Engine> {
    match Engine::with_config(config) {
        Ok(engine) => Some(engine),
        Err(e) => {
            eprintln!("Failed to start a match: {}", e);
            None
        }
    }
}

pub(crate) fn print_board(engine: &Engine) {
    println!("{}", engine.graph());
}

pub(crate) fn print_search_stats(engine: &Engine) {
    let stats = engine.get_search_stats();
    let duration = stats
        .last_search_duration
        .map(|duration| format!("{:.3}s", duration.as_secs_f64()))
        .unwrap_or_else(|| "-".to_string());
    let score = stats
        .last_score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "depth {} | positions {} | cutoffs {} | score {} | time {}",
        stats.depth, stats.positions_searched, stats.cutoffs, score, duration
    );
}

/// A comma separated edge list such as `0-1,2-3`. Empty means no edges.
#[derive(Debug, Default)]
pub struct EdgeListArg(pub Vec<Edge>);

impl FromStr for EdgeListArg {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Edge::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(EdgeListArg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_list_arg() {
        let EdgeListArg(edges) = "0-1, 3-2,".parse().unwrap();
        assert_eq!(
            edges,
            vec![Edge::new(0, 1).unwrap(), Edge::new(2, 3).unwrap()]
        );
    }

    #[test]
    fn test_empty_edge_list_arg() {
        let EdgeListArg(edges) = "".parse().unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_invalid_edge_list_arg() {
        assert!("0-1,2".parse::<EdgeListArg>().is_err());
        assert!("1-1".parse::<EdgeListArg>().is_err());
    }
}
