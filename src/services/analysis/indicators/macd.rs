//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::ema;
use crate::types::MacdValue;

pub const FAST_PERIOD: usize = 12;
pub const SLOW_PERIOD: usize = 26;
pub const SIGNAL_PERIOD: usize = 9;

/// Latest MACD triple:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
///
/// `None` until the signal line has its first value (34 prices).
pub fn macd(prices: &[f64]) -> Option<MacdValue> {
    let fast_ema = ema(prices, FAST_PERIOD);
    let slow_ema = ema(prices, SLOW_PERIOD);

    if slow_ema.is_empty() {
        return None;
    }

    // Align the EMAs (fast starts earlier)
    let offset = SLOW_PERIOD - FAST_PERIOD;
    let macd_line: Vec<f64> = fast_ema
        .iter()
        .skip(offset)
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal_line = ema(&macd_line, SIGNAL_PERIOD);

    let macd = *macd_line.last()?;
    let signal = *signal_line.last()?;

    Some(MacdValue {
        macd,
        signal,
        histogram: macd - signal,
    })
}
