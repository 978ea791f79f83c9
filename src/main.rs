use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Sim;

fn main() {
    env_logger::init();
    Sim::from_args().execute();
}
