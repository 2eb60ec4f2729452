//! Average True Range (ATR) indicator.

use crate::types::Candle;

/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
pub fn true_range(current: &Candle, previous: &Candle) -> f64 {
    let hl = current.high - current.low;
    let hc = (current.high - previous.close).abs();
    let lc = (current.low - previous.close).abs();
    hl.max(hc).max(lc)
}

/// Simple average of the last `min(period, available)` true ranges.
///
/// A single candle has no previous close, so its high-low range is used.
/// Empty input returns 0.
pub fn atr(candles: &[Candle], period: usize) -> f64 {
    match candles {
        [] => 0.0,
        [only] => only.range(),
        _ => {
            let ranges: Vec<f64> = candles
                .windows(2)
                .map(|pair| true_range(&pair[1], &pair[0]))
                .collect();
            let window = period.clamp(1, ranges.len());
            ranges[ranges.len() - window..].iter().sum::<f64>() / window as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_uptrend_candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                let base = 100.0 + i as f64 * 1.5;
                Candle::new(1_000_000 + i as i64 * 60_000, base, base + 2.0, base - 1.0, base + 1.0, 1000.0)
            })
            .collect()
    }

    #[test]
    fn test_atr_empty() {
        assert_eq!(atr(&[], 14), 0.0);
    }

    #[test]
    fn test_atr_single_candle_range() {
        let candle = Candle::new(0, 10.0, 12.5, 9.0, 11.0, 1.0);
        assert_eq!(atr(&[candle], 14), 3.5);
    }

    #[test]
    fn test_true_range_gap() {
        let prev = Candle::new(0, 10.0, 11.0, 9.0, 10.0, 1.0);
        let gap_up = Candle::new(1, 15.0, 16.0, 14.0, 15.5, 1.0);
        assert_eq!(true_range(&gap_up, &prev), 6.0);
    }

    #[test]
    fn test_atr_uses_available_when_short() {
        let candles = vec![
            Candle::new(1000, 100.0, 105.0, 95.0, 102.0, 1000.0),
            Candle::new(2000, 102.0, 108.0, 100.0, 106.0, 1200.0),
            Candle::new(3000, 106.0, 110.0, 104.0, 108.0, 800.0),
            Candle::new(4000, 108.0, 112.0, 105.0, 107.0, 900.0),
            Candle::new(5000, 107.0, 109.0, 103.0, 105.0, 1100.0),
        ];
        assert_eq!(atr(&candles, 14), 6.75);
    }

    #[test]
    fn test_atr_trailing_window() {
        let candles = create_uptrend_candles(30);
        // Each candle spans 3.0 and opens 0.5 above the previous close
        assert!((atr(&candles, 14) - 3.0).abs() < 1e-9);
    }
}
