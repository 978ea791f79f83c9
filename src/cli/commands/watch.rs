//! Watch command - watch the computer play against itself.

use std::thread;
use std::time::Duration;

use sim::graph::Player;
use structopt::StructOpt;

use super::util::{create_engine, print_board, print_search_stats, EngineArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut engine = match create_engine(self.engine.config()) {
            Some(engine) => engine,
            None => return,
        };

        let mut player = Player::Human;
        print_board(&engine);

        while engine.game_ending().is_none() {
            match engine.make_best_move(player) {
                Ok(edge) => {
                    println!("{} colored {}", player, edge);
                    print_search_stats(&engine);
                    print_board(&engine);
                }
                Err(e) => {
                    eprintln!("Failed to make a move: {}", e);
                    return;
                }
            }

            player = player.opponent();
            thread::sleep(Duration::from_millis(self.delay_ms));
        }

        match engine.game_ending().and_then(|ending| ending.winner()) {
            Some(winner) => println!("{} wins", winner),
            None => println!("draw"),
        }
    }
}
