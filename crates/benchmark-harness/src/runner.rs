//! Benchmark execution for the annotation engine
//!
//! Each case measures one engine call exactly as the dashboard issues it:
//! `highlight` runs `compute_decorations` over the document snapshot and
//! issue list, `citations` runs `extract_citations` over the assistant
//! response. Warmup iterations are not recorded; recorded samples pass
//! through IQR outlier filtering before summarization.

use annotation_engine::{compute_decorations, extract_citations};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Config;
use crate::corpus::{self, Corpus};
use crate::stats::{filter_outliers, LatencySummary};

/// Results from a complete run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResults {
    /// Name of the benchmark suite
    pub suite_name: String,
    /// Configuration used for the run
    pub config_summary: ConfigSummary,
    /// One result per measured case
    pub case_results: Vec<CaseResult>,
    /// Total wall-clock duration of the run
    pub total_duration_ms: u64,
    /// Whether every case met its budget
    pub passed: bool,
    /// Budget violations across all cases
    pub failures: Vec<String>,
    /// Timestamp when the run started
    pub started_at: String,
}

/// Summary of the configuration used
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub iterations: u32,
    pub warmup: u32,
    pub document_words: usize,
    pub issue_count: usize,
}

/// Results for a single case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Case name ("highlight" or "citations")
    pub case_name: String,
    /// Statistics over the filtered samples, in microseconds
    pub summary: LatencySummary,
    /// Filtered samples, in microseconds
    pub samples_us: Vec<f64>,
    /// Samples dropped by IQR filtering
    pub outliers_removed: usize,
    /// Whether this case met its budget
    pub passed: bool,
    /// Budget violations for this case
    pub failures: Vec<String>,
}

/// Execute the full benchmark described by `config`
pub fn run(config: &Config) -> Result<BenchmarkResults> {
    let started_at = chrono::Utc::now().to_rfc3339();
    let run_start = Instant::now();

    let corpus = corpus::build_corpus(&config.corpus);
    info!(
        document_bytes = corpus.document.plain_text.len(),
        issues = corpus.issues.len(),
        response_bytes = corpus.response.len(),
        "corpus ready"
    );

    let case_results = vec![
        run_highlight_case(config, &corpus)?,
        run_citations_case(config, &corpus)?,
    ];

    let passed = case_results.iter().all(|case| case.passed);
    let failures: Vec<String> = case_results
        .iter()
        .flat_map(|case| case.failures.iter().cloned())
        .collect();

    Ok(BenchmarkResults {
        suite_name: config.benchmark.name.clone(),
        config_summary: ConfigSummary {
            iterations: config.benchmark.iterations,
            warmup: config.benchmark.warmup,
            document_words: config.corpus.document_words,
            issue_count: config.corpus.issue_count,
        },
        case_results,
        total_duration_ms: run_start.elapsed().as_millis() as u64,
        passed,
        failures,
        started_at,
    })
}

fn run_highlight_case(config: &Config, corpus: &Corpus) -> Result<CaseResult> {
    run_case(
        "highlight",
        config,
        config.thresholds.highlight_p95_us,
        || black_box(compute_decorations(&corpus.document.plain_text, &corpus.issues)).len(),
    )
}

fn run_citations_case(config: &Config, corpus: &Corpus) -> Result<CaseResult> {
    run_case(
        "citations",
        config,
        config.thresholds.citations_p95_us,
        || black_box(extract_citations(&corpus.response)).len(),
    )
}

fn run_case(
    name: &str,
    config: &Config,
    p95_budget_us: Option<f64>,
    mut work: impl FnMut() -> usize,
) -> Result<CaseResult> {
    // One untimed call guards against a corpus change that would leave the
    // engine with nothing to do and the timings meaningless.
    let produced = work();
    ensure!(produced > 0, "case '{}' produced no output", name);

    for _ in 0..config.benchmark.warmup {
        work();
    }

    let mut samples = Vec::with_capacity(config.benchmark.iterations as usize);
    for _ in 0..config.benchmark.iterations {
        let start = Instant::now();
        work();
        samples.push(start.elapsed().as_secs_f64() * 1_000_000.0);
    }

    let (samples_us, outliers_removed) = filter_outliers(&samples);
    let summary = LatencySummary::from_samples(&samples_us)
        .with_context(|| format!("case '{}' collected no samples", name))?;

    let mut failures = Vec::new();
    if let Some(budget) = p95_budget_us {
        if summary.p95 > budget {
            failures.push(format!(
                "{}: p95 {:.1}us exceeds budget {:.1}us",
                name, summary.p95, budget
            ));
        }
    }

    debug!(
        case = name,
        p50_us = summary.p50,
        p95_us = summary.p95,
        outliers_removed,
        "case complete"
    );

    Ok(CaseResult {
        case_name: name.to_string(),
        passed: failures.is_empty(),
        summary,
        samples_us,
        outliers_removed,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BenchmarkConfig, CorpusConfig, ThresholdsConfig};

    fn small_config() -> Config {
        Config {
            benchmark: BenchmarkConfig {
                name: "test run".to_string(),
                iterations: 15,
                warmup: 2,
            },
            corpus: CorpusConfig {
                document_words: 200,
                issue_count: 5,
                response_points: 2,
                response_urls: 2,
                seed: 7,
            },
            thresholds: ThresholdsConfig::default(),
        }
    }

    #[test]
    fn test_run_produces_both_cases() {
        let results = run(&small_config()).unwrap();

        let names: Vec<&str> = results
            .case_results
            .iter()
            .map(|c| c.case_name.as_str())
            .collect();
        assert_eq!(names, vec!["highlight", "citations"]);
    }

    #[test]
    fn test_run_passes_without_thresholds() {
        let results = run(&small_config()).unwrap();
        assert!(results.passed);
        assert!(results.failures.is_empty());
    }

    #[test]
    fn test_sample_accounting_adds_up() {
        let config = small_config();
        let results = run(&config).unwrap();

        for case in &results.case_results {
            assert_eq!(
                case.samples_us.len() + case.outliers_removed,
                config.benchmark.iterations as usize
            );
            assert_eq!(case.summary.count, case.samples_us.len());
        }
    }

    #[test]
    fn test_impossible_budget_fails_the_run() {
        let mut config = small_config();
        config.thresholds.highlight_p95_us = Some(0.000001);

        let results = run(&config).unwrap();
        assert!(!results.passed);
        assert!(results.failures[0].contains("highlight"));

        // The other case is unaffected.
        assert!(results.case_results[1].passed);
    }
}
