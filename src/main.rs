use clap::Parser;
use stockscan::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
