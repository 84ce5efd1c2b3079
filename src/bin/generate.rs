use anyhow::{Context, bail};
use clap::Parser;
use domino_chain::format::format_tiles;
use domino_chain::generator::{self, SUITE_SIZE};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
struct Cli {
    #[clap(long, short = 's')]
    seed: Option<u64>,
    /// 1-based index of the test printed to stdout.
    #[clap(long, short = 'i', default_value_t = 1)]
    index: usize,
    /// Number of tests in the suite.
    #[clap(long, short = 't', default_value_t = SUITE_SIZE)]
    tests: usize,
    /// Write the whole suite into this directory as 01.in, 02.in, ...
    #[clap(long, short = 'o')]
    out_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let suite = generator::test_suite(args.seed, args.tests);

    let Some(dir) = &args.out_dir else {
        if args.index == 0 || args.index > suite.len() {
            bail!("Test index {} out of range 1..={}", args.index, suite.len());
        }
        print!("{}", format_tiles(&suite[args.index - 1]));
        return Ok(());
    };

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    for (i, tiles) in suite.iter().enumerate() {
        let path = dir.join(format!("{:02}.in", i + 1));
        fs::write(&path, format_tiles(tiles))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    eprintln!("!log tests {}", suite.len());
    Ok(())
}
