//! Moving averages.

/// Exponential moving average series.
///
/// Seeded with the simple average of the first `period` values, so the first
/// element corresponds to `values[period - 1]`. Empty when there are fewer
/// than `period` values.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut series = Vec::with_capacity(values.len() - period + 1);

    let mut current = sma(&values[..period]);
    series.push(current);

    for value in &values[period..] {
        current = (value - current) * multiplier + current;
        series.push(current);
    }

    series
}

/// Latest EMA value, if the series is long enough.
pub fn latest_ema(values: &[f64], period: usize) -> Option<f64> {
    ema(values, period).last().copied()
}

/// Simple average; 0 for an empty slice.
pub fn sma(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
