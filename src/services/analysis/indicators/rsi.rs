//! Relative Strength Index (RSI) indicator.

/// Wilder RSI for every position that has a full lookback.
///
/// The first value corresponds to `prices[period]`; the series is empty when
/// there are not more than `period` prices. Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
pub fn rsi_series(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.len() <= period {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);

    for pair in prices.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    // Initial averages are simple, the rest use Wilder smoothing
    let mut avg_gain: f64 = gains.iter().take(period).sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses.iter().take(period).sum::<f64>() / period as f64;

    let mut series = Vec::with_capacity(gains.len() - period + 1);
    series.push(rsi_value(avg_gain, avg_loss));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        series.push(rsi_value(avg_gain, avg_loss));
    }

    series
}

/// Latest RSI, or 0 when the series is too short to produce one.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    rsi_series(prices, period).last().copied().unwrap_or(0.0)
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // A perfectly flat window is degenerate
        return if avg_gain == 0.0 { 0.0 } else { 100.0 };
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
