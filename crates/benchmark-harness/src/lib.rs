//! Latency harness for the annotation engine
//!
//! The annotators run synchronously inside the dashboard's update cycle:
//! issue highlighting on every document change, citation extraction once
//! per assistant response. This crate measures both calls over a
//! deterministic synthetic corpus and checks the results against
//! configurable latency budgets.
//!
//! # Example
//!
//! ```no_run
//! use benchmark_harness::{runner, Config, OutputFormat, Reporter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::from_file("benchmark.toml")?;
//! let results = runner::run(&config)?;
//!
//! Reporter::new(OutputFormat::Console).report(&results)?;
//! Reporter::new(OutputFormat::Json).write_to_file(&results, "results.json")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Runs are configured with TOML:
//!
//! ```toml
//! [benchmark]
//! name = "annotation latency"
//! iterations = 200
//! warmup = 10
//!
//! [corpus]
//! document_words = 2000
//! issue_count = 25
//!
//! [thresholds]
//! highlight_p95_us = 5000.0
//! citations_p95_us = 500.0
//! ```

pub mod config;
pub mod corpus;
pub mod reporter;
pub mod runner;
pub mod stats;

// Re-export main types for convenience
pub use config::Config;
pub use reporter::{OutputFormat, Reporter};
pub use runner::{BenchmarkResults, CaseResult};
pub use stats::LatencySummary;
