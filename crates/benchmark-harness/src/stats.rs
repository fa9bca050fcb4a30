//! Statistics over latency samples
//!
//! Percentiles use linear interpolation between nearest ranks; outlier
//! filtering uses the interquartile-range fences so a stray scheduler
//! hiccup does not dominate a p99.

use serde::{Deserialize, Serialize};

/// Percentile of `samples` with linear interpolation
///
/// Returns `None` for an empty slice or a percentile outside `0..=100`.
pub fn percentile(samples: &[f64], p: f64) -> Option<f64> {
    if samples.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Some(percentile_of_sorted(&sorted, p))
}

fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (rank - lower as f64) * (sorted[upper] - sorted[lower])
    }
}

/// Statistical summary of one case's latency samples, in microseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencySummary {
    pub min: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

impl LatencySummary {
    /// Summarize samples; `None` when there is nothing to summarize
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let variance = if count > 1 {
            sorted.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64
        } else {
            0.0
        };

        Some(Self {
            min: sorted[0],
            p50: percentile_of_sorted(&sorted, 50.0),
            p95: percentile_of_sorted(&sorted, 95.0),
            p99: percentile_of_sorted(&sorted, 99.0),
            max: sorted[count - 1],
            mean,
            std_dev: variance.sqrt(),
            count,
        })
    }
}

/// Drop samples outside the IQR fences `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`
///
/// Returns the kept samples (original order preserved) and the number
/// removed. Fewer than four samples are returned unfiltered; the fences
/// are meaningless at that size.
pub fn filter_outliers(samples: &[f64]) -> (Vec<f64>, usize) {
    if samples.len() < 4 {
        return (samples.to_vec(), 0);
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let q1 = percentile_of_sorted(&sorted, 25.0);
    let q3 = percentile_of_sorted(&sorted, 75.0);
    let iqr = q3 - q1;
    let lower = q1 - 1.5 * iqr;
    let upper = q3 + 1.5 * iqr;

    let kept: Vec<f64> = samples
        .iter()
        .copied()
        .filter(|&x| x >= lower && x <= upper)
        .collect();
    let removed = samples.len() - kept.len();
    (kept, removed)
}
