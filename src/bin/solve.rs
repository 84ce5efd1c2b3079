use anyhow::Context;
use clap::{Parser, ValueEnum};
use domino_chain::ChainSearch;
use domino_chain::format::{self, Answer};
use std::time::Instant;

/// Reference solver: reads the tiles from stdin and prints a longest chain.
#[derive(Parser)]
struct Cli {
    #[clap(long, short = 'f', default_value = "text")]
    format: Format,
    /// Report search statistics on stderr.
    #[clap(long, default_value_t = false)]
    stats: bool,
    /// Explore every branch instead of cutting hopeless ones.
    #[clap(long, default_value_t = false)]
    no_prune: bool,
}

#[derive(Default, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let tiles = format::read_tiles_from_stdin().context("Failed to read tiles")?;

    let stime = Instant::now();
    let outcome = ChainSearch::new(&tiles).prune(!args.no_prune).run();
    if args.stats {
        let stats = &outcome.stats;
        eprintln!("!log tiles {}", tiles.len());
        eprintln!("!log length {}", outcome.chain.len());
        eprintln!("!log nodes {}", stats.nodes);
        eprintln!("!log leaves {}", stats.leaves);
        eprintln!("!log pruned {}", stats.pruned);
        eprintln!("!log improvements {}", stats.improvements);
        eprintln!("!log depth {}", stats.max_depth);
        eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    }

    match args.format {
        Format::Text => print!("{}", format::format_chain(&outcome.chain)),
        Format::Json => println!(
            "{}",
            serde_json::to_string(&Answer::from(&outcome.chain))?
        ),
    }
    Ok(())
}
