//! Serve command - the match protocol over stdin and stdout.

use std::io;

use sim::protocol::SimSession;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct ServeArgs {
    #[structopt(short, long, help = "Search depth in plies, overriding the level")]
    pub depth: Option<u8>,
    #[structopt(long = "move-time", help = "Move time budget in milliseconds")]
    pub move_time_ms: Option<u64>,
}

impl Command for ServeArgs {
    fn execute(self) {
        let move_time = self.move_time_ms.map(std::time::Duration::from_millis);
        let mut session = SimSession::with_limits(self.depth, move_time);

        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(e) = session.run(stdin.lock(), stdout.lock()) {
            eprintln!("Session ended with an error: {}", e);
        }
    }
}
