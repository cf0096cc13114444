//! Descriptive statistics over recorded metrics.

use super::MetricSummary;

/// Summarize `values` with Welford's online mean/variance.
///
/// Returns `None` for an empty slice: the mean of no data is undefined, not 0.
/// The standard deviation is the population form (divide by `n`).
///
/// # Example
///
/// ```
/// use life_engine::batch::stats::summarize;
///
/// let summary = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((summary.mean - 5.0).abs() < 1e-12);
/// assert!((summary.std_dev - 2.0).abs() < 1e-12);
/// assert!(summarize(&[]).is_none());
/// ```
pub fn summarize(values: &[f64]) -> Option<MetricSummary> {
    if values.is_empty() {
        return None;
    }

    let mut mean = 0.0_f64;
    let mut m2 = 0.0_f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for (i, &value) in values.iter().enumerate() {
        let n = (i + 1) as f64;
        let delta = value - mean;
        mean += delta / n;
        m2 += delta * (value - mean);
        min = min.min(value);
        max = max.max(value);
    }

    let count = values.len();
    let variance = (m2 / count as f64).max(0.0);
    let std_dev = variance.sqrt();

    Some(MetricSummary {
        count,
        mean,
        std_dev,
        std_error: std_dev / (count as f64).sqrt(),
        min,
        max,
    })
}

/// Number of values strictly greater than `threshold`.
pub fn count_above(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|v| **v > threshold).count()
}
