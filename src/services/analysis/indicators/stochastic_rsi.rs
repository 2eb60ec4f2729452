//! Stochastic RSI indicator.

use super::rsi::rsi_series;
use crate::services::analysis::series::closes;
use crate::types::{Candle, SignalDirection, StochasticRsi};

const OVERBOUGHT: f64 = 80.0;
const OVERSOLD: f64 = 20.0;

/// Stochastic oscillator applied to the RSI series:
/// %K = (RSI - lowest RSI) / (highest RSI - lowest RSI) * 100
/// over the last `stoch_period` RSI values.
///
/// %D is reported equal to %K; no separate smoothing is applied.
/// Returns the neutral default (50/50) with fewer than
/// `rsi_period + stoch_period` candles.
pub fn stochastic_rsi(candles: &[Candle], rsi_period: usize, stoch_period: usize) -> StochasticRsi {
    if stoch_period == 0 || candles.len() < rsi_period + stoch_period {
        return StochasticRsi::default();
    }

    let series = rsi_series(&closes(candles), rsi_period);
    if series.len() < stoch_period {
        return StochasticRsi::default();
    }

    let window = &series[series.len() - stoch_period..];
    let lowest = window.iter().copied().fold(f64::INFINITY, f64::min);
    let highest = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let current = window[window.len() - 1];

    let k = if highest > lowest {
        (current - lowest) / (highest - lowest) * 100.0
    } else {
        50.0
    };
    let d = k;

    let signal = if k > d && k < OVERSOLD {
        SignalDirection::Bullish
    } else if k < d && k > OVERBOUGHT {
        SignalDirection::Bearish
    } else {
        SignalDirection::Neutral
    };

    StochasticRsi {
        k,
        d,
        signal,
        overbought: k > OVERBOUGHT && d > OVERBOUGHT,
        oversold: k < OVERSOLD && d < OVERSOLD,
    }
}
