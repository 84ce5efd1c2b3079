use anyhow::Context;
use clap::Parser;
use domino_chain::validator;
use std::io::Read;
use std::path::PathBuf;

/// Checks that a test input is well formed.
#[derive(Parser)]
struct Cli {
    /// Input file. Reads stdin when omitted.
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let input = match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            input
        }
    };
    match validator::validate(&input) {
        Ok(tiles) => {
            eprintln!("!log status OK");
            eprintln!("!log tiles {}", tiles.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("invalid input: {e}");
            eprintln!("!log status INVALID");
            std::process::exit(3);
        }
    }
}
