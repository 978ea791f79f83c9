//! Play command - play a game against the computer.

use std::io;

use sim::game::{Engine, EngineError};
use sim::graph::Player;
use sim::input_handler::{parse_move_input, MoveInput};
use structopt::StructOpt;

use super::util::{create_engine, print_board, print_search_stats, EngineArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
}

impl Command for PlayArgs {
    fn execute(self) {
        let mut engine = match create_engine(self.engine.config()) {
            Some(engine) => engine,
            None => return,
        };

        if let Err(e) = play(&mut engine) {
            eprintln!("Game aborted: {}", e);
        }
    }
}

fn play(engine: &mut Engine) -> Result<(), EngineError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    print_board(engine);
    while engine.game_ending().is_none() {
        println!("Your move (e.g. `0 3`, or `q` to quit):");
        let (start, end) = match parse_move_input(&mut input) {
            Ok(MoveInput::Edge { start, end }) => (start, end),
            Ok(MoveInput::Quit) => return Ok(()),
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let outcome = match engine.commit_human_move(start, end) {
            Ok(outcome) => outcome,
            Err(EngineError::GraphError { error }) => {
                println!("{}", error);
                continue;
            }
            Err(e) => return Err(e),
        };
        if !outcome.accepted {
            println!("{} is already colored", outcome.edge);
            continue;
        }

        if !engine.is_over(Player::Human) {
            let reply = engine.compute_and_commit_engine_move()?;
            println!("Engine colored {}", reply);
            print_search_stats(engine);
        }
        print_board(engine);
    }

    if let Some(ending) = engine.game_ending() {
        match ending.winner() {
            Some(Player::Human) => println!("The engine closed a triangle. You win!"),
            Some(Player::Engine) => println!("You closed a triangle. The engine wins."),
            None => println!("Every edge is colored and nobody closed a triangle. Draw."),
        }
    }
    Ok(())
}
