//! Terminal plotting binary.

use clap::Parser;
use textviz::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
