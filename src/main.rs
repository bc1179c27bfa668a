use clap::Parser;
use clipmemo::{handle_command, Clipmemo};
use std::process;

fn main() {
    let cli = Clipmemo::parse();

    if let Err(e) = handle_command(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
