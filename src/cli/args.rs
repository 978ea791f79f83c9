//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, serve::ServeArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "sim",
    about = "The game of Sim: color the edges of a complete graph and avoid closing a triangle of your own color"
)]
pub enum Sim {
    #[structopt(
        name = "play",
        about = "Play a game against the computer on `--nodes` nodes (default: 6). The computer searches at the given `--difficulty` (default: LOW), or at `--depth` plies if given. Enter moves as two node numbers, e.g. `0 3` or `0-3`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself on `--nodes` nodes (default: 6) at the given `--difficulty` (default: LOW)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "serve",
        about = "Speak the line-oriented match protocol on stdin and stdout: `new game`, `level <nodes> <LEVEL>`, `player move <start> <end>` and `quit`."
    )]
    Serve(ServeArgs),
    #[structopt(
        name = "best-move",
        about = "Determine the best move in a position given as edge lists, e.g. `--human 0-1,2-3 --engine 1-2`. The move is chosen for `--to-move` (default: engine)."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Sim {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            Serve(cmd),
            BestMove(cmd),
        }
    }
}
