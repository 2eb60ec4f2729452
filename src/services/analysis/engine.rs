//! Single-pass analysis over a candle window.

use tracing::{debug, warn};

use super::indicators::{
    bollinger_bands, latest_ema, macd, rsi_series, stochastic_rsi, volume_profile,
};
use super::levels::support_resistance;
use super::planner::{entry_points, profit_targets, stop_loss};
use super::series::closes;
use crate::config::AnalysisSettings;
use crate::error::AnalysisError;
use crate::types::{
    Candle, IndicatorSignals, IndicatorSnapshot, MacdValue, PriceAnalysis, SignalDirection,
    StopLossMethod, TimeHorizon,
};

/// Fewest candles a price analysis will run on.
pub const MIN_CANDLES: usize = 5;

/// Confidence in [0, 1] from data depth, level count and horizon.
pub fn confidence(candle_count: usize, level_count: usize, horizon: TimeHorizon) -> f64 {
    let mut score = 0.5;
    score += (candle_count as f64 / 50.0).min(0.2);
    score += (level_count as f64 / 20.0).min(0.2);
    if horizon.is_scalping() {
        score -= 0.1;
    }
    score.clamp(0.0, 1.0)
}

/// Build a trade plan for `current_price` from the candle history.
///
/// The moderate entry is the reference entry for the ATR stop and the
/// profit targets, falling back to `current_price` when the moderate entry
/// is clamped to zero.
pub fn analyze_price_points(
    candles: &[Candle],
    current_price: f64,
    horizon: TimeHorizon,
    settings: &AnalysisSettings,
) -> Result<PriceAnalysis, AnalysisError> {
    if candles.len() < MIN_CANDLES {
        warn!(
            "Price analysis skipped: {} candles, need {}",
            candles.len(),
            MIN_CANDLES
        );
        return Err(AnalysisError::InsufficientData {
            required: MIN_CANDLES,
            actual: candles.len(),
        });
    }

    if !current_price.is_finite() || current_price <= 0.0 {
        warn!("Price analysis skipped: invalid price {}", current_price);
        return Err(AnalysisError::InvalidPrice(current_price));
    }

    debug!(
        "Analyzing {} candles at price {} for {} horizon",
        candles.len(),
        current_price,
        horizon
    );

    let levels = support_resistance(candles, settings.support_lookback);
    let entry_points = entry_points(candles, current_price, settings);
    // A crash below one ATR clamps the moderate entry to zero; plan from the price instead
    let entry = if entry_points.moderate > 0.0 {
        entry_points.moderate
    } else {
        current_price
    };
    let stop_loss = stop_loss(candles, entry, StopLossMethod::Atr, None, settings);
    let profit_targets = profit_targets(candles, entry, stop_loss.price, settings);
    let confidence = confidence(candles.len(), levels.level_count(), horizon);

    debug!(
        "Plan for {}: entry {:.4}, stop {:.4}, targets {:.4}/{:.4}/{:.4}, confidence {:.2}",
        horizon,
        entry,
        stop_loss.price,
        profit_targets.target1,
        profit_targets.target2,
        profit_targets.target3,
        confidence
    );

    Ok(PriceAnalysis {
        entry_points,
        stop_loss,
        profit_targets,
        time_horizon: horizon,
        risk_assessment: horizon.risk_assessment().to_string(),
        confidence,
    })
}

fn rsi_signal(rsi: Option<f64>) -> SignalDirection {
    match rsi {
        Some(v) if v < 30.0 => SignalDirection::Bullish,
        Some(v) if v > 70.0 => SignalDirection::Bearish,
        _ => SignalDirection::Neutral,
    }
}

fn macd_signal(macd: Option<&MacdValue>) -> SignalDirection {
    match macd {
        Some(m) if m.histogram > 0.0 => SignalDirection::Bullish,
        Some(m) if m.histogram < 0.0 => SignalDirection::Bearish,
        _ => SignalDirection::Neutral,
    }
}

/// Indicator-only snapshot with a majority-vote overall signal.
pub fn analyze_indicators(candles: &[Candle], settings: &AnalysisSettings) -> IndicatorSnapshot {
    debug!("Computing indicator snapshot over {} candles", candles.len());

    let prices = closes(candles);
    let latest_rsi = rsi_series(&prices, settings.rsi_period).last().copied();
    let macd = macd(&prices);
    let stoch_rsi = stochastic_rsi(candles, settings.stoch_rsi_period, settings.stoch_period);

    let rsi = rsi_signal(latest_rsi);
    let macd_direction = macd_signal(macd.as_ref());
    let overall = SignalDirection::majority(&[rsi, macd_direction, stoch_rsi.signal]);

    IndicatorSnapshot {
        rsi: latest_rsi.unwrap_or(0.0),
        ema12: latest_ema(&prices, 12),
        ema26: latest_ema(&prices, 26),
        macd,
        bollinger: bollinger_bands(candles, settings.bollinger_period, settings.bollinger_std_dev),
        stoch_rsi,
        volume_profile: volume_profile(candles, settings.volume_profile_bins),
        signals: IndicatorSignals {
            rsi,
            macd: macd_direction,
            stoch_rsi: stoch_rsi.signal,
            overall,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_components() {
        assert_eq!(confidence(0, 0, TimeHorizon::OneHour), 0.5);
        assert!((confidence(5, 0, TimeHorizon::OneHour) - 0.6).abs() < 1e-12);
        assert!((confidence(500, 100, TimeHorizon::OneDay) - 0.9).abs() < 1e-12);
        assert!((confidence(5, 0, TimeHorizon::FiveMinutes) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_crash_price_plans_from_current_price() {
        let ranging: Vec<Candle> = (0..30)
            .map(|i| Candle::new(i * 1000, 100.0, 103.0, 97.0, 100.0, 1000.0))
            .collect();
        let analysis =
            analyze_price_points(&ranging, 2.0, TimeHorizon::OneDay, &AnalysisSettings::default())
                .unwrap();

        assert_eq!(analysis.entry_points.moderate, 0.0);
        assert_eq!(analysis.stop_loss.price, 0.0);
        assert_eq!(analysis.stop_loss.percentage, 100.0);

        let targets = &analysis.profit_targets;
        assert_eq!(targets.target1, 6.0);
        assert_eq!(targets.target2, 8.0);
        assert!(targets.target3 > targets.target2);
        assert_eq!(targets.risk_reward(), Some(2.0));
    }

    #[test]
    fn test_rsi_signal_thresholds() {
        assert_eq!(rsi_signal(None), SignalDirection::Neutral);
        assert_eq!(rsi_signal(Some(0.0)), SignalDirection::Bullish);
        assert_eq!(rsi_signal(Some(75.0)), SignalDirection::Bearish);
        assert_eq!(rsi_signal(Some(50.0)), SignalDirection::Neutral);
    }

    #[test]
    fn test_macd_signal_from_histogram() {
        let up = MacdValue {
            macd: 1.0,
            signal: 0.5,
            histogram: 0.5,
        };
        assert_eq!(macd_signal(Some(&up)), SignalDirection::Bullish);
        assert_eq!(macd_signal(None), SignalDirection::Neutral);
    }
}
