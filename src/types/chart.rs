use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Requested analysis time horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeHorizon {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    #[default]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
}

/// Coarse grouping of horizons used for qualitative risk text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizonBucket {
    Short,
    Medium,
    Long,
}

impl TimeHorizon {
    /// Get the horizon from a string token.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "5m" => Some(TimeHorizon::FiveMinutes),
            "15m" => Some(TimeHorizon::FifteenMinutes),
            "30m" => Some(TimeHorizon::ThirtyMinutes),
            "1h" => Some(TimeHorizon::OneHour),
            "4h" => Some(TimeHorizon::FourHours),
            "1d" => Some(TimeHorizon::OneDay),
            "1w" => Some(TimeHorizon::OneWeek),
            _ => None,
        }
    }

    /// Wire token for this horizon.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeHorizon::FiveMinutes => "5m",
            TimeHorizon::FifteenMinutes => "15m",
            TimeHorizon::ThirtyMinutes => "30m",
            TimeHorizon::OneHour => "1h",
            TimeHorizon::FourHours => "4h",
            TimeHorizon::OneDay => "1d",
            TimeHorizon::OneWeek => "1w",
        }
    }

    pub fn bucket(&self) -> HorizonBucket {
        match self {
            TimeHorizon::FiveMinutes | TimeHorizon::FifteenMinutes | TimeHorizon::ThirtyMinutes => {
                HorizonBucket::Short
            }
            TimeHorizon::OneHour | TimeHorizon::FourHours => HorizonBucket::Medium,
            TimeHorizon::OneDay | TimeHorizon::OneWeek => HorizonBucket::Long,
        }
    }

    /// Very short horizons carry a confidence penalty.
    pub fn is_scalping(&self) -> bool {
        matches!(self, TimeHorizon::FiveMinutes | TimeHorizon::FifteenMinutes)
    }

    /// Fixed qualitative risk text for this horizon's bucket.
    pub fn risk_assessment(&self) -> &'static str {
        match self.bucket() {
            HorizonBucket::Short => {
                "High risk: short-term price action is dominated by noise and sudden volatility spikes"
            }
            HorizonBucket::Medium => {
                "Moderate risk: intraday swings can invalidate levels, size positions accordingly"
            }
            HorizonBucket::Long => {
                "Lower risk: levels are derived from broader structure but require wider stops"
            }
        }
    }
}

impl std::fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OHLCV candle in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Zero-range candle at a single price.
    pub fn flat(timestamp: i64, price: f64, volume: f64) -> Self {
        Self::new(timestamp, price, price, price, price, volume)
    }

    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Check `high >= max(open, close)` and `low <= min(open, close)`.
    pub fn is_well_formed(&self) -> bool {
        self.high >= self.open.max(self.close) && self.low <= self.open.min(self.close)
    }
}

/// Candle as delivered by an exchange, before normalization.
///
/// Exchanges return klines as JSON arrays of varying width: full
/// `[ts, o, h, l, c, v, ...]` rows, `[ts, price]` pairs from
/// price-history endpoints, or truncated rows. The shape is resolved
/// once at deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Vec<Value>")]
pub enum RawCandle {
    Full {
        timestamp: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    },
    Point {
        timestamp: i64,
        price: f64,
        volume: f64,
    },
    Partial {
        price: f64,
    },
}

/// Read a JSON element as a number. Numeric strings count as numbers.
fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

impl From<Vec<f64>> for RawCandle {
    fn from(values: Vec<f64>) -> Self {
        Self::from(values.into_iter().map(Value::from).collect::<Vec<_>>())
    }
}

impl From<Vec<Value>> for RawCandle {
    fn from(values: Vec<Value>) -> Self {
        let nums: Vec<Option<f64>> = values.iter().map(numeric).collect();

        if nums.len() >= 6 && nums[..6].iter().all(Option::is_some) {
            let v: Vec<f64> = nums[..6].iter().flatten().copied().collect();
            return RawCandle::Full {
                timestamp: v[0] as i64,
                open: v[1],
                high: v[2],
                low: v[3],
                close: v[4],
                volume: v[5],
            };
        }

        if let [Some(ts), Some(price), rest @ ..] = nums.as_slice() {
            return RawCandle::Point {
                timestamp: *ts as i64,
                price: *price,
                volume: rest.first().copied().flatten().unwrap_or(0.0),
            };
        }

        RawCandle::Partial {
            price: nums.iter().rev().flatten().next().copied().unwrap_or(0.0),
        }
    }
}

impl From<&RawCandle> for Candle {
    fn from(raw: &RawCandle) -> Self {
        match *raw {
            RawCandle::Full {
                timestamp,
                open,
                high,
                low,
                close,
                volume,
            } => Candle::new(timestamp, open, high, low, close, volume),
            RawCandle::Point {
                timestamp,
                price,
                volume,
            } => Candle::flat(timestamp, price, volume),
            RawCandle::Partial { price } => Candle::flat(0, price, 0.0),
        }
    }
}
