//! JSON reporter for benchmark results

use anyhow::{Context, Result};

use crate::runner::BenchmarkResults;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Serialize results as compact JSON
    pub fn format(results: &BenchmarkResults) -> Result<String> {
        serde_json::to_string(results).context("Failed to serialize results to JSON")
    }

    /// Serialize results as pretty-printed JSON
    pub fn format_pretty(results: &BenchmarkResults) -> Result<String> {
        serde_json::to_string_pretty(results).context("Failed to serialize results to JSON")
    }
}
