use anyhow::Context;
use clap::Parser;
use domino_chain::checker::{self, Verdict};
use domino_chain::format;
use std::path::{Path, PathBuf};

/// Checker, called as `check <input> <output> <answer>`.
#[derive(Parser, Debug)]
struct Cli {
    /// Test input.
    input: PathBuf,
    /// Participant output.
    output: PathBuf,
    /// Jury answer.
    answer: PathBuf,
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn judge(cli: &Cli) -> Verdict {
    let jury_side = read(&cli.input).and_then(|input| {
        let tiles = format::parse_tiles(&input)
            .with_context(|| format!("Invalid input {}", cli.input.display()))?;
        Ok((tiles, read(&cli.answer)?))
    });
    let (tiles, answer) = match jury_side {
        Ok(v) => v,
        Err(e) => return Verdict::Fail(format!("{e:#}")),
    };
    match read(&cli.output) {
        Ok(output) => checker::check(&tiles, &output, &answer),
        Err(e) => Verdict::WrongAnswer(format!("{e:#}")),
    }
}

fn main() {
    let cli = Cli::parse();
    let verdict = judge(&cli);
    println!("{verdict}");
    eprintln!("!log status {}", verdict.status());
    if let Verdict::Accepted { length } = verdict {
        eprintln!("!log score {length}");
    }
    std::process::exit(verdict.exit_code());
}
