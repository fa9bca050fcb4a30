//! Run the annotation latency benchmark
//!
//! Usage: cargo run -p benchmark-harness --example run_benchmark -- [config.toml]
//!
//! Without an argument the built-in defaults are used.

use anyhow::Result;
use benchmark_harness::{runner, Config, OutputFormat, Reporter};
use std::env;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => {
            println!("Loading config from: {}", path);
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    println!("Starting benchmark: {}", config.benchmark.name);
    println!("  Iterations:     {}", config.benchmark.iterations);
    println!("  Warmup:         {}", config.benchmark.warmup);
    println!("  Document words: {}", config.corpus.document_words);
    println!("  Issues:         {}", config.corpus.issue_count);
    println!();

    let results = runner::run(&config)?;

    Reporter::new(OutputFormat::Console).report(&results)?;

    if !results.passed {
        std::process::exit(1);
    }
    Ok(())
}
