use clap::Parser;
use dwca_validator::cli::{args::Args, commands};
use std::process;

fn main() {
    process::exit(run());
}

/// Run the selected command and map the outcome to an exit code
///
/// 0 = every checked file passed, 1 = validation problems were found,
/// 2 = the command itself failed.
fn run() -> i32 {
    let args = Args::parse();

    match commands::run(args) {
        Ok(summary) => {
            if summary.all_valid() {
                0
            } else {
                1
            }
        }
        Err(error) => {
            eprintln!("Error: {:#}", anyhow::Error::from(error));
            2
        }
    }
}
