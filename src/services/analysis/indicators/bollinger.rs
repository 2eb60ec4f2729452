//! Bollinger Bands indicator.

use super::ema::sma;
use crate::types::{BollingerBands, Candle};

/// Calculate population standard deviation.
fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance: f64 =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Bollinger Bands over the last `min(period, len)` closes.
///
/// - Middle band: SMA of the closes
/// - Upper/lower band: middle +/- multiplier * standard deviation
///
/// %B places the last close within the bands and is clamped to [0, 1]; it is
/// 0.5 when the bands have collapsed. Empty input returns all zeros.
pub fn bollinger_bands(candles: &[Candle], period: usize, multiplier: f64) -> BollingerBands {
    let Some(last) = candles.last() else {
        return BollingerBands::default();
    };

    let window = period.clamp(1, candles.len());
    let closes: Vec<f64> = candles[candles.len() - window..]
        .iter()
        .map(|c| c.close)
        .collect();

    let middle = sma(&closes);
    let deviation = std_dev(&closes, middle) * multiplier;
    let upper = middle + deviation;
    let lower = middle - deviation;
    let band_width = upper - lower;

    let bandwidth = if middle != 0.0 { band_width / middle } else { 0.0 };
    let percent_b = if band_width > 0.0 {
        ((last.close - lower) / band_width).clamp(0.0, 1.0)
    } else {
        0.5
    };

    BollingerBands {
        upper,
        middle,
        lower,
        bandwidth,
        percent_b,
    }
}
