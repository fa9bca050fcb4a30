//! Console reporter for benchmark results

use anyhow::Result;
use std::fmt::Write;

use crate::runner::{BenchmarkResults, CaseResult};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format benchmark results for console output
    pub fn format(results: &BenchmarkResults) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                 ANNOTATION LATENCY RESULTS                   ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        writeln!(output, "Suite:     {}", results.suite_name)?;
        writeln!(output, "Started:   {}", results.started_at)?;
        writeln!(output, "Duration:  {}ms", results.total_duration_ms)?;
        writeln!(output)?;

        writeln!(output, "Configuration:")?;
        writeln!(output, "  Iterations:      {}", results.config_summary.iterations)?;
        writeln!(output, "  Warmup:          {}", results.config_summary.warmup)?;
        writeln!(output, "  Document words:  {}", results.config_summary.document_words)?;
        writeln!(output, "  Issues:          {}", results.config_summary.issue_count)?;
        writeln!(output)?;

        writeln!(output, "  ┌────────────┬──────────┬──────────┬──────────┬──────────┬──────────┐")?;
        writeln!(output, "  │ Case       │ Min (µs) │ P50 (µs) │ P95 (µs) │ P99 (µs) │ Max (µs) │")?;
        writeln!(output, "  ├────────────┼──────────┼──────────┼──────────┼──────────┼──────────┤")?;
        for case in &results.case_results {
            Self::format_case_row(&mut output, case)?;
        }
        writeln!(output, "  └────────────┴──────────┴──────────┴──────────┴──────────┴──────────┘")?;

        for case in &results.case_results {
            if case.outliers_removed > 0 {
                writeln!(
                    output,
                    "  {}: {} outlier sample(s) removed",
                    case.case_name, case.outliers_removed
                )?;
            }
        }

        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        let status = if results.passed { "PASSED" } else { "FAILED" };
        let status_symbol = if results.passed { "✓" } else { "✗" };
        writeln!(output, "Overall Status: {} {}", status_symbol, status)?;

        if !results.failures.is_empty() {
            writeln!(output)?;
            writeln!(output, "Failures:")?;
            for failure in &results.failures {
                writeln!(output, "  • {}", failure)?;
            }
        }

        writeln!(output)?;
        Ok(output)
    }

    fn format_case_row(output: &mut String, case: &CaseResult) -> Result<()> {
        let status = if case.passed { " " } else { "✗" };
        writeln!(
            output,
            "  │ {}{:<10} │ {:>8.1} │ {:>8.1} │ {:>8.1} │ {:>8.1} │ {:>8.1} │",
            status,
            case.case_name,
            case.summary.min,
            case.summary.p50,
            case.summary.p95,
            case.summary.p99,
            case.summary.max
        )?;
        Ok(())
    }
}
