//! Support and resistance detection from swing pivots.

use crate::types::{Candle, SupportResistance};

/// Maximum levels reported on each side.
pub const MAX_LEVELS: usize = 5;

/// Find pivot lows (support) and pivot highs (resistance).
///
/// A candle's low is support when it is strictly lower than every other low
/// within `lookback` candles on both sides; resistance is the mirror for
/// highs. Candles without a full window on both sides are never pivots.
/// Support is sorted descending, resistance ascending, each capped at
/// [`MAX_LEVELS`].
pub fn support_resistance(candles: &[Candle], lookback: usize) -> SupportResistance {
    if candles.len() < 3 || lookback == 0 || candles.len() <= lookback * 2 {
        return SupportResistance::default();
    }

    let mut support = Vec::new();
    let mut resistance = Vec::new();

    for i in lookback..candles.len() - lookback {
        let window = &candles[i - lookback..=i + lookback];
        let candle = &candles[i];

        let is_pivot_low = window
            .iter()
            .enumerate()
            .all(|(j, other)| j == lookback || candle.low < other.low);
        let is_pivot_high = window
            .iter()
            .enumerate()
            .all(|(j, other)| j == lookback || candle.high > other.high);

        if is_pivot_low {
            support.push(candle.low);
        }
        if is_pivot_high {
            resistance.push(candle.high);
        }
    }

    support.sort_by(|a, b| b.total_cmp(a));
    support.dedup();
    support.truncate(MAX_LEVELS);

    resistance.sort_by(|a, b| a.total_cmp(b));
    resistance.dedup();
    resistance.truncate(MAX_LEVELS);

    SupportResistance {
        support,
        resistance,
    }
}
