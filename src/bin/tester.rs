use anyhow::Context;
use clap::Parser;
use domino_chain::checker::{self, Verdict};
use domino_chain::format::format_chain;
use domino_chain::{find_longest_chain, validator};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Runs a solver command on one input and judges its output against the reference solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The shell command to run (e.g., the solution binary)
    cmd: String,
    /// Path to the input file
    input: PathBuf,
    /// Path to the output file (will be created)
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("No such input: {}", cli.input.display()))?;
    let tiles = validator::validate(&input)
        .with_context(|| format!("Invalid input: {}", cli.input.display()))?;

    let input_file = fs::File::open(&cli.input)?;
    let output_file = fs::File::create(&cli.output)
        .with_context(|| format!("Cannot create {}", cli.output.display()))?;
    let stime = Instant::now();
    let status = Command::new("sh")
        .arg("-c")
        .arg(&cli.cmd)
        .stdin(Stdio::from(input_file))
        .stdout(Stdio::from(output_file))
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute command: {}", cli.cmd))?;
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    if !status.success() {
        if status.code() == Some(124) {
            eprintln!("!log status TLE");
        } else {
            eprintln!("!log status RE");
        }
        return Ok(());
    }

    let output = fs::read_to_string(&cli.output)
        .with_context(|| format!("Failed to read {}", cli.output.display()))?;
    let answer = format_chain(&find_longest_chain(&tiles));
    let verdict = checker::check(&tiles, &output, &answer);
    eprintln!("{verdict}");
    eprintln!("!log status {}", verdict.status());
    if let Verdict::Accepted { length } = verdict {
        eprintln!("!log score {length}");
    }
    Ok(())
}
