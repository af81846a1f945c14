use clap::Parser;
use quake_reporter::cli::{run, Cli};
use quake_reporter::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
