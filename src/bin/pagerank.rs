use anyhow::{Context, Result};
use clap::Parser;
use std::{path::PathBuf, process};
use surfer_rank::{
    crawl,
    page_rank::{iterated, sampled, PageRank, PageRankResult},
};
use tracing_subscriber::EnvFilter;

/// Ranks the pages of a directory of linked HTML documents.
#[derive(Parser)]
#[command(name = "pagerank", version)]
struct Cli {
    /// Directory holding the `.html` pages
    corpus: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("cannot read corpus {}", cli.corpus.display()))?;

    let cfg = sampled::Config::default();
    let ranks = sampled::SampledPageRank::new(&corpus, &cfg)?.calc()?;
    println!("PageRank Results from Sampling (n = {})", cfg.samples);
    print!("{:?}", ranks.debug(&corpus));

    let cfg = iterated::Config::default();
    let ranks = iterated::IteratedPageRank::new(&corpus, &cfg)?.calc()?;
    println!("PageRank Results from Iteration");
    print!("{:?}", ranks.debug(&corpus));
    Ok(())
}
