//! Volume Profile (volume-at-price) indicator.

use crate::types::{Candle, VolumeLevel, VolumeProfile};

/// Share of total volume covered by the value area.
pub const VALUE_AREA_PCT: f64 = 0.70;

/// Bucket traded volume by price.
///
/// The observed range `[min(low), max(high)]` is split into `bins` equal
/// buckets and each candle's whole volume goes to the bucket containing its
/// typical price. The value area is the smallest set of buckets, taken by
/// descending volume, that reaches 70% of the total.
pub fn volume_profile(candles: &[Candle], bins: usize) -> VolumeProfile {
    if candles.is_empty() || bins == 0 {
        return VolumeProfile::default();
    }

    let min_price = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let max_price = candles.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    let bucket_size = (max_price - min_price) / bins as f64;

    let mut volumes = vec![0.0; bins];
    for candle in candles {
        let index = if bucket_size > 0.0 {
            (((candle.typical_price() - min_price) / bucket_size).floor().max(0.0) as usize).min(bins - 1)
        } else {
            0
        };
        volumes[index] += candle.volume;
    }

    let total_volume: f64 = volumes.iter().sum();

    let levels: Vec<VolumeLevel> = volumes
        .iter()
        .enumerate()
        .map(|(i, volume)| {
            let price_low = min_price + i as f64 * bucket_size;
            let price_high = price_low + bucket_size;
            VolumeLevel {
                price_low,
                price_high,
                price: (price_low + price_high) / 2.0,
                volume: *volume,
                percentage: if total_volume > 0.0 {
                    volume / total_volume * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect();

    // Highest volume first; ties keep the lower bucket first
    let mut by_volume: Vec<usize> = (0..bins).collect();
    by_volume.sort_by(|a, b| volumes[*b].total_cmp(&volumes[*a]));

    let poc = levels[by_volume[0]].price;

    let target = total_volume * VALUE_AREA_PCT;
    let mut cumulative = 0.0;
    let mut value_area_high = f64::NEG_INFINITY;
    let mut value_area_low = f64::INFINITY;
    for index in by_volume {
        cumulative += volumes[index];
        value_area_high = value_area_high.max(levels[index].price_high);
        value_area_low = value_area_low.min(levels[index].price_low);
        if cumulative >= target {
            break;
        }
    }

    VolumeProfile {
        levels,
        poc,
        value_area_high,
        value_area_low,
        total_volume,
    }
}
