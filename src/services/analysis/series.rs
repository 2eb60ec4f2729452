//! Candle normalization and structural validation.

use crate::types::{Candle, RawCandle, SeriesReport};

/// Normalize raw exchange rows into canonical candles, ascending by timestamp.
///
/// Never fails: malformed rows degrade to flat candles (see [`RawCandle`]).
pub fn convert_candles(raw: &[RawCandle]) -> Vec<Candle> {
    let mut candles: Vec<Candle> = raw.iter().map(Candle::from).collect();
    candles.sort_by_key(|c| c.timestamp);
    candles
}

/// Inspect a series for OHLC envelope violations and timestamp ordering.
///
/// Advisory only; nothing here rejects data.
pub fn validate_series(candles: &[Candle]) -> SeriesReport {
    let malformed_candles = candles.iter().filter(|c| !c.is_well_formed()).count();

    let mut out_of_order = 0;
    let mut duplicate_timestamps = 0;
    for pair in candles.windows(2) {
        if pair[1].timestamp < pair[0].timestamp {
            out_of_order += 1;
        } else if pair[1].timestamp == pair[0].timestamp {
            duplicate_timestamps += 1;
        }
    }

    let issues = malformed_candles + out_of_order + duplicate_timestamps;
    let quality_score = if candles.is_empty() {
        1.0
    } else {
        (1.0 - issues as f64 / candles.len() as f64).clamp(0.0, 1.0)
    };

    SeriesReport {
        candle_count: candles.len(),
        malformed_candles,
        out_of_order,
        duplicate_timestamps,
        valid: issues == 0,
        quality_score,
    }
}

/// True when every candle is well formed and timestamps strictly increase.
pub fn is_valid_series(candles: &[Candle]) -> bool {
    validate_series(candles).valid
}

/// Closing prices in series order.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(ts: i64, close: f64) -> RawCandle {
        RawCandle::Full {
            timestamp: ts,
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 10.0,
        }
    }

    #[test]
    fn test_convert_empty() {
        assert!(convert_candles(&[]).is_empty());
    }

    #[test]
    fn test_convert_sorts_by_timestamp() {
        let raw = vec![full(3000, 3.0), full(1000, 1.0), full(2000, 2.0)];
        let candles = convert_candles(&raw);
        let times: Vec<i64> = candles.iter().map(|c| c.timestamp).collect();
        assert_eq!(times, vec![1000, 2000, 3000]);
        assert_eq!(closes(&candles), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_convert_mixed_shapes() {
        let raw = vec![
            full(2000, 50.0),
            RawCandle::Point {
                timestamp: 1000,
                price: 49.0,
                volume: 0.0,
            },
        ];
        let candles = convert_candles(&raw);
        assert_eq!(candles[0], Candle::flat(1000, 49.0, 0.0));
        assert_eq!(candles[1].close, 50.0);
    }

    #[test]
    fn test_validate_clean_series() {
        let candles = convert_candles(&[full(1000, 1.0), full(2000, 2.0)]);
        let report = validate_series(&candles);
        assert!(report.valid);
        assert_eq!(report.quality_score, 1.0);
        assert!(is_valid_series(&candles));
    }

    #[test]
    fn test_validate_counts_issues() {
        let candles = vec![
            Candle::new(2000, 10.0, 11.0, 9.0, 10.5, 1.0),
            Candle::new(1000, 10.0, 11.0, 9.0, 10.5, 1.0),
            Candle::new(1000, 10.0, 9.5, 9.0, 10.5, 1.0),
            Candle::new(4000, 10.0, 11.0, 9.0, 10.5, 1.0),
        ];
        let report = validate_series(&candles);
        assert_eq!(report.malformed_candles, 1);
        assert_eq!(report.out_of_order, 1);
        assert_eq!(report.duplicate_timestamps, 1);
        assert!(!report.valid);
        assert!((report.quality_score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_validate_empty_is_valid() {
        let report = validate_series(&[]);
        assert!(report.valid);
        assert_eq!(report.candle_count, 0);
    }
}
