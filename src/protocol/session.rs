//! Protocol state machine and command execution

use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::{info, warn};

use crate::game::{Engine, EngineConfig};
use crate::graph::{Player, PRACTICAL_MIN_NODES_COUNT};

use super::command_parser::SimCommand;
use super::response_formatter::SimResponseFormatter;

/// One client connection. Holds at most one match at a time; `new game` drops it
/// and `level` starts the next one.
pub struct SimSession {
    engine: Option<Engine>,
    search_depth: Option<u8>,
    move_time: Option<Duration>,
    should_quit: bool,
}

impl Default for SimSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SimSession {
    pub fn new() -> Self {
        Self::with_limits(None, None)
    }

    /// `search_depth` overrides the depth of the level the client picks.
    pub fn with_limits(search_depth: Option<u8>, move_time: Option<Duration>) -> Self {
        Self {
            engine: None,
            search_depth,
            move_time,
            should_quit: false,
        }
    }

    /// Check if the session should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    /// Execute a command and return the response lines, in order
    pub fn execute_command(&mut self, command: SimCommand) -> Vec<String> {
        match command {
            SimCommand::NewGame => {
                self.engine = None;
                vec![SimResponseFormatter::format_choose_level()]
            }

            SimCommand::Level {
                nodes_count,
                difficulty,
            } => {
                let nodes_count = nodes_count.max(PRACTICAL_MIN_NODES_COUNT);
                let config = EngineConfig {
                    search_depth: self.search_depth,
                    move_time: self.move_time,
                    ..EngineConfig::new(nodes_count, difficulty)
                };

                match Engine::with_config(config) {
                    Ok(engine) => {
                        self.engine = Some(engine);
                        vec![SimResponseFormatter::format_draw_field(nodes_count)]
                    }
                    Err(e) => vec![SimResponseFormatter::format_error(&e.to_string())],
                }
            }

            SimCommand::PlayerMove { start, end } => match self.play_round(start, end) {
                Ok(responses) => responses,
                Err(e) => {
                    warn!("rejected player move {} {}: {}", start, end, e);
                    vec![SimResponseFormatter::format_error(&e)]
                }
            },

            SimCommand::Quit => {
                self.should_quit = true;
                Vec::new()
            }

            SimCommand::Unknown(cmd) => {
                if !cmd.is_empty() {
                    vec![SimResponseFormatter::format_error(&format!(
                        "unknown command: {}",
                        cmd
                    ))]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Plays the human's move and, if the match goes on, the engine's reply.
    fn play_round(&mut self, start: usize, end: usize) -> Result<Vec<String>, String> {
        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| "no match in progress".to_string())?;

        let outcome = engine
            .commit_human_move(start, end)
            .map_err(|e| e.to_string())?;

        let mut responses = vec![SimResponseFormatter::format_move_validity(
            outcome.accepted,
            start,
            end,
        )];
        if !outcome.accepted {
            return Ok(responses);
        }

        if engine.is_over(Player::Human) {
            if let Some(ending) = engine.game_ending() {
                info!("match over: {:?}", ending);
                responses.push(SimResponseFormatter::format_game_over(ending));
            }
            return Ok(responses);
        }

        let reply = engine
            .compute_and_commit_engine_move()
            .map_err(|e| e.to_string())?;
        responses.push(SimResponseFormatter::format_bot_move(reply));

        if engine.is_over(Player::Engine) {
            if let Some(ending) = engine.game_ending() {
                info!("match over: {:?}", ending);
                responses.push(SimResponseFormatter::format_game_over(ending));
            }
        }

        Ok(responses)
    }

    /// Run the protocol loop, reading commands from `input` and writing responses
    /// to `output` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let responses = match line.parse::<SimCommand>() {
                Ok(command) => self.execute_command(command),
                Err(e) => vec![SimResponseFormatter::format_error(&e)],
            };

            for response in responses {
                writeln!(output, "{}", response)?;
            }
            output.flush()?;

            if self.should_quit() {
                break;
            }
        }

        Ok(())
    }
}
