//! Best move command - determine the best move from a position.

use sim::game::{Engine, EngineError};
use sim::graph::{Edge, Player};
use structopt::StructOpt;

use super::util::{create_engine, print_board, print_search_stats, EdgeListArg, EngineArgs};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(long, default_value = "", help = "Human edges, e.g. `0-1,2-3`")]
    pub human: EdgeListArg,
    #[structopt(long = "engine", default_value = "", help = "Engine edges, e.g. `1-2`")]
    pub engine_edges: EdgeListArg,
    #[structopt(short, long = "to-move", default_value = "engine")]
    pub to_move: Player,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut engine = match create_engine(self.engine.config()) {
            Some(engine) => engine,
            None => return,
        };

        if let Err(e) = set_up_position(&mut engine, &self.human.0, &self.engine_edges.0) {
            eprintln!("Invalid position: {}", e);
            return;
        }

        if let Some(ending) = engine.game_ending() {
            print_board(&engine);
            eprintln!("The game is already over: {:?}", ending);
            return;
        }

        match engine.best_move_for(self.to_move) {
            Ok(best_move) => {
                println!("{}", best_move);
                print_search_stats(&engine);
            }
            Err(e) => eprintln!("Failed to calculate best move: {}", e),
        }
    }
}

fn set_up_position(
    engine: &mut Engine,
    human_edges: &[Edge],
    engine_edges: &[Edge],
) -> Result<(), EngineError> {
    let colored = human_edges
        .iter()
        .map(|&edge| (Player::Human, edge))
        .chain(engine_edges.iter().map(|&edge| (Player::Engine, edge)));

    for (player, edge) in colored {
        engine.commit_move(player, edge)?;
    }
    Ok(())
}
