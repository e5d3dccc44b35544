//! Descriptive statistics over a [`Dataset`].
//!
//! Every function returns `None` (or an empty mode list) when the value is undefined
//! instead of failing. Variance is the population variance (divide by `n`).

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::types::{Dataset, SortedDataset};

use super::sort::merge_sort;

/// Fixed iteration count for [`newton_sqrt`].
pub const NEWTON_ITERATIONS: usize = 30;

/// Arithmetic mean.
///
/// Falls back to summing pre-divided values when the plain sum overflows; `None` if the
/// mean is still not representable.
pub fn mean(dataset: &Dataset) -> Option<f64> {
    let values = dataset.values();
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let mean = if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    };
    mean.is_finite().then_some(mean)
}

/// Middle value (or the average of the two middle values for an even count).
pub fn median(sorted: &SortedDataset) -> Option<f64> {
    let values = sorted.values();
    let n = values.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(values[mid])
    } else {
        let (a, b) = (values[mid - 1], values[mid]);
        Some(a + (b - a) / 2.0)
    }
}

/// All values attaining the highest frequency, in ascending order.
///
/// Empty when the dataset is empty or when no value repeats.
pub fn modes(dataset: &Dataset) -> Vec<f64> {
    // Keyed on the bit pattern; -0.0 is folded into 0.0 so equal values share a bucket.
    let mut counts: HashMap<u64, (f64, usize)> = HashMap::new();
    for &v in dataset.values() {
        let v = if v == 0.0 { 0.0 } else { v };
        counts.entry(v.to_bits()).or_insert((v, 0)).1 += 1;
    }

    let mut max_freq = 0;
    for &(_, freq) in counts.values() {
        if freq > max_freq {
            max_freq = freq;
        }
    }

    if max_freq <= 1 {
        return Vec::new();
    }

    let winners: Vec<f64> = counts
        .values()
        .filter(|(_, freq)| *freq == max_freq)
        .map(|(v, _)| *v)
        .collect();
    merge_sort(&winners)
}

/// Population variance `sum((x - mean)^2) / n`. `None` when it overflows `f64`.
pub fn variance(dataset: &Dataset, mean: f64) -> Option<f64> {
    let values = dataset.values();
    if values.is_empty() {
        return None;
    }
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum();
    let var = sum_sq / values.len() as f64;
    var.is_finite().then_some(var)
}

/// Square root by [`NEWTON_ITERATIONS`] Newton-Raphson steps seeded at `max(value, 1.0)`.
///
/// `None` for negative or non-finite input, exactly `0.0` for zero.
pub fn newton_sqrt(value: f64) -> Option<f64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value == 0.0 {
        return Some(0.0);
    }

    let mut estimate = value.max(1.0);
    for _ in 0..NEWTON_ITERATIONS {
        estimate = 0.5 * (estimate + value / estimate);
    }
    Some(estimate)
}

/// Standard deviation from an (optional) variance.
pub fn standard_deviation(variance: Option<f64>) -> Option<f64> {
    variance.and_then(newton_sqrt)
}

/// Every statistic of one run. Computed once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub modes: Vec<f64>,
    pub variance: Option<f64>,
    pub standard_deviation: Option<f64>,
    /// Wall-clock time from the start of the run until the statistics were computed.
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl StatisticsSummary {
    /// Compute every statistic. `elapsed` is left at zero; the pipeline stamps it.
    pub fn compute(dataset: &Dataset, sorted: &SortedDataset) -> Self {
        let mean = mean(dataset);
        let variance = mean.and_then(|m| variance(dataset, m));
        Self {
            count: dataset.len(),
            mean,
            median: median(sorted),
            modes: modes(dataset),
            variance,
            standard_deviation: standard_deviation(variance),
            elapsed: Duration::ZERO,
        }
    }

    /// Summary with every statistic undefined.
    pub fn undefined() -> Self {
        Self {
            count: 0,
            mean: None,
            median: None,
            modes: Vec::new(),
            variance: None,
            standard_deviation: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
