//! Configuration parsing for latency runs
//!
//! TOML-based configuration covering iteration counts, synthetic corpus
//! sizing, and per-case latency budgets.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Run configuration
    pub benchmark: BenchmarkConfig,
    /// Synthetic corpus sizing
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Latency budgets
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            benchmark: BenchmarkConfig {
                name: "annotation latency".to_string(),
                iterations: default_iterations(),
                warmup: default_warmup(),
            },
            corpus: CorpusConfig::default(),
            thresholds: ThresholdsConfig::default(),
        }
    }
}

/// Core run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Name of the benchmark suite
    pub name: String,
    /// Number of measured iterations per case (default: 200)
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Number of unrecorded warmup runs per case (default: 10)
    #[serde(default = "default_warmup")]
    pub warmup: u32,
}

fn default_iterations() -> u32 {
    200
}

fn default_warmup() -> u32 {
    10
}

/// Synthetic corpus sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Word count of the generated review document (default: 2000)
    #[serde(default = "default_document_words")]
    pub document_words: usize,
    /// Number of issues sampled from the document (default: 25)
    #[serde(default = "default_issue_count")]
    pub issue_count: usize,
    /// Numbered points in the generated assistant response (default: 6)
    #[serde(default = "default_response_points")]
    pub response_points: usize,
    /// URLs in the generated assistant response (default: 4)
    #[serde(default = "default_response_urls")]
    pub response_urls: usize,
    /// Seed for deterministic generation (default: 42)
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            document_words: default_document_words(),
            issue_count: default_issue_count(),
            response_points: default_response_points(),
            response_urls: default_response_urls(),
            seed: default_seed(),
        }
    }
}

fn default_document_words() -> usize {
    2000
}

fn default_issue_count() -> usize {
    25
}

fn default_response_points() -> usize {
    6
}

fn default_response_urls() -> usize {
    4
}

fn default_seed() -> u64 {
    42
}

/// Latency budgets for pass/fail determination, in microseconds
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThresholdsConfig {
    /// Issue-highlighting p95 budget
    pub highlight_p95_us: Option<f64>,
    /// Citation-extraction p95 budget
    pub citations_p95_us: Option<f64>,
}
