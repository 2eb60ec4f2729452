//! Fibonacci retracement and extension levels.

use crate::types::{ExtensionDirection, ExtensionTarget, FibonacciExtension, FibonacciRetracement};

pub const EXTENSION_RATIOS: [f64; 4] = [0.618, 1.0, 1.618, 2.618];

/// Retracement levels between two prices.
///
/// The lower price is always the 0% anchor and the higher one 100%, so
/// argument order does not matter.
pub fn fibonacci_retracement(p1: f64, p2: f64) -> FibonacciRetracement {
    let low = p1.min(p2);
    let high = p1.max(p2);
    let diff = high - low;

    FibonacciRetracement {
        level0: low,
        level236: low + diff * 0.236,
        level382: low + diff * 0.382,
        level500: low + diff * 0.5,
        level618: low + diff * 0.618,
        level100: high,
    }
}

/// Project extension targets from a two-swing structure.
///
/// The first swing runs `swing1_start -> swing1_end`; the second ends at
/// `swing2_end`. A second swing that holds beyond the first swing's origin is
/// a continuation, one that breaks through it is a reversal. Targets are
/// 61.8/100/161.8/261.8% of the first swing's size measured from
/// `swing2_end`.
pub fn fibonacci_extension(swing1_start: f64, swing1_end: f64, swing2_end: f64) -> FibonacciExtension {
    let magnitude = (swing1_end - swing1_start).abs();

    let direction = if swing1_end >= swing1_start {
        if swing2_end > swing1_start {
            ExtensionDirection::UptrendContinuation
        } else {
            ExtensionDirection::DowntrendReversal
        }
    } else if swing2_end < swing1_start {
        ExtensionDirection::DowntrendContinuation
    } else {
        ExtensionDirection::UptrendReversal
    };

    let sign = if direction.projects_up() { 1.0 } else { -1.0 };

    // Ratios ascend, so up-projections come out ascending and down-projections descending
    let targets = EXTENSION_RATIOS
        .iter()
        .map(|ratio| ExtensionTarget {
            ratio: *ratio,
            price: swing2_end + sign * magnitude * ratio,
        })
        .collect();

    FibonacciExtension { direction, targets }
}
