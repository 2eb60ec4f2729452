//! Entry, stop-loss and profit-target planning.

use super::indicators::{atr, fibonacci_retracement};
use super::levels::support_resistance;
use crate::config::AnalysisSettings;
use crate::types::{
    Candle, EntryMethods, EntryPoints, ProfitTargets, StopLoss, StopLossMethod, TargetMethods,
};

/// Default distance for percentage stops and the support fallback.
pub const DEFAULT_STOP_PCT: f64 = 5.0;

/// Smallest risk used for target spacing, as a fraction of entry.
const MIN_RISK_FRACTION: f64 = 0.01;

/// `price` reduced by `pct` percent.
fn below(price: f64, pct: f64) -> f64 {
    price - price * pct / 100.0
}

/// Lowest low and highest high over the last `window` candles.
pub fn swing_range(candles: &[Candle], window: usize) -> Option<(f64, f64)> {
    let recent = &candles[candles.len().saturating_sub(window.max(1))..];
    if recent.is_empty() {
        return None;
    }
    let low = recent.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let high = recent.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    Some((low, high))
}

/// Minimum ATR as a fraction of entry. Cheaper assets get wider floors.
fn atr_floor_fraction(entry: f64) -> f64 {
    if entry > 50_000.0 {
        0.015
    } else if entry > 1_000.0 {
        0.02
    } else {
        0.03
    }
}

/// Entry levels around the current price.
///
/// - conservative: nearest support below the price plus 2%, else the price
/// - moderate: lower of the 61.8% retracement of the recent swing and price - 1 ATR
/// - aggressive: lower of price - 2% and moderate
pub fn entry_points(candles: &[Candle], current_price: f64, settings: &AnalysisSettings) -> EntryPoints {
    let levels = support_resistance(candles, settings.support_lookback);
    let atr = atr(candles, settings.atr_period);

    let (conservative, conservative_method) = match levels.nearest_support_below(current_price) {
        Some(support) => (
            support * 1.02,
            format!("Support at {:.2} plus 2% buffer", support),
        ),
        None => (
            current_price,
            "Current price (no support below)".to_string(),
        ),
    };

    let atr_entry = current_price - atr;
    let (moderate, moderate_method) = match swing_range(candles, settings.swing_window) {
        Some((low, high)) => {
            let fib = fibonacci_retracement(low, high);
            if fib.level618 < atr_entry {
                (fib.level618, format!("61.8% retracement of {:.2}-{:.2} swing", low, high))
            } else {
                (atr_entry, format!("Current price minus 1 ATR ({:.2})", atr))
            }
        }
        None => (atr_entry, format!("Current price minus 1 ATR ({:.2})", atr)),
    };
    let moderate = moderate.max(0.0);

    let discounted = current_price * 0.98;
    let (aggressive, aggressive_method) = if discounted <= moderate {
        (discounted, "2% below current price".to_string())
    } else {
        (moderate, "Moderate entry (already below 2% discount)".to_string())
    };

    EntryPoints {
        conservative,
        moderate,
        aggressive,
        methods: EntryMethods {
            conservative: conservative_method,
            moderate: moderate_method,
            aggressive: aggressive_method,
        },
    }
}

/// Stop-loss below `entry`.
///
/// `percentage` only applies to [`StopLossMethod::Percentage`] and defaults to 5%.
pub fn stop_loss(
    candles: &[Candle],
    entry: f64,
    method: StopLossMethod,
    percentage: Option<f64>,
    settings: &AnalysisSettings,
) -> StopLoss {
    let (price, explanation) = match method {
        StopLossMethod::Percentage => {
            let pct = percentage.unwrap_or(DEFAULT_STOP_PCT).clamp(0.0, 100.0);
            return StopLoss {
                price: below(entry, pct).max(0.0),
                percentage: pct,
                method,
                explanation: format!("Fixed {}% below entry", pct),
            };
        }
        StopLossMethod::Atr => {
            let raw_atr = atr(candles, settings.atr_period);
            let floor = entry * atr_floor_fraction(entry);
            let effective = raw_atr.max(floor);
            let explanation = if effective > raw_atr {
                format!(
                    "2x ATR below entry, ATR raised from {:.4} to {:.1}% floor",
                    raw_atr,
                    atr_floor_fraction(entry) * 100.0
                )
            } else {
                format!("2x ATR ({:.4}) below entry", raw_atr)
            };
            // Prices cannot go negative; a stop wider than entry closes at zero
            ((entry - 2.0 * effective).max(0.0), explanation)
        }
        StopLossMethod::Support => {
            let levels = support_resistance(candles, settings.support_lookback);
            match levels.nearest_support_below(entry) {
                Some(support) => (
                    support * 0.98,
                    format!("2% below support at {:.2}", support),
                ),
                None => {
                    return StopLoss {
                        price: below(entry, DEFAULT_STOP_PCT),
                        percentage: DEFAULT_STOP_PCT,
                        method,
                        explanation: format!(
                            "No support below entry, using {}% fallback",
                            DEFAULT_STOP_PCT
                        ),
                    };
                }
            }
        }
    };

    let percentage = if entry > 0.0 {
        (entry - price) / entry * 100.0
    } else {
        0.0
    };

    StopLoss {
        price,
        percentage,
        method,
        explanation,
    }
}

/// Three ascending targets above `entry`.
///
/// Targets are spaced in multiples of the risk to `stop_price`, with the risk
/// floored at 1% of entry. If the first target is still under 2% away, flat
/// 5%/10% targets are used. The third target starts at 4R and is raised, in
/// order, to the next resistance above target 2, then to the 161.8% swing
/// extension if that stays within 1.5x of the resistance-based value, else
/// to the 127.2% extension.
pub fn profit_targets(
    candles: &[Candle],
    entry: f64,
    stop_price: f64,
    settings: &AnalysisSettings,
) -> ProfitTargets {
    let realized_risk = entry - stop_price;
    let min_risk = entry * MIN_RISK_FRACTION;
    let risk = if realized_risk.is_finite() {
        realized_risk.max(min_risk)
    } else {
        min_risk
    };

    let mut target1 = entry + 2.0 * risk;
    let mut target2 = entry + 3.0 * risk;
    let mut target1_method = "2R from entry".to_string();
    let mut target2_method = "3R from entry".to_string();
    let mut target3 = entry + 4.0 * risk;
    let mut target3_method = "4R from entry".to_string();

    if target1 - entry < entry * 0.02 {
        target1 = entry * 1.05;
        target2 = entry * 1.10;
        target1_method = "5% above entry".to_string();
        target2_method = "10% above entry".to_string();
        if target3 < entry * 1.15 {
            target3 = entry * 1.15;
            target3_method = "15% above entry".to_string();
        }
    }

    let levels = support_resistance(candles, settings.support_lookback);
    if let Some(resistance) = levels.nearest_resistance_above(target2) {
        if resistance > target3 {
            target3 = resistance;
            target3_method = format!("Resistance at {:.2}", resistance);
        }
    }

    if let Some((low, high)) = swing_range(candles, settings.swing_window) {
        let range = high - low;
        let ext_1272 = low + range * 1.272;
        let ext_1618 = low + range * 1.618;
        let base = target3;

        // 161.8% is bounded against the pre-extension target to skip outliers from very wide swings
        if ext_1618 > base && ext_1618 <= base * 1.5 {
            target3 = ext_1618;
            target3_method = "161.8% Fibonacci extension".to_string();
        } else if ext_1272 > base {
            target3 = ext_1272;
            target3_method = "127.2% Fibonacci extension".to_string();
        }
    }

    let risk_reward_ratio = if realized_risk > 0.0 && realized_risk.is_finite() {
        (target1 - entry) / realized_risk
    } else {
        f64::NAN
    };

    ProfitTargets {
        target1,
        target2,
        target3,
        risk_reward_ratio,
        methods: TargetMethods {
            target1: target1_method,
            target2: target2_method,
            target3: target3_method,
        },
    }
}
