use serde::{Deserialize, Serialize};

/// Direction of a qualitative indicator signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignalDirection {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl SignalDirection {
    /// Majority vote over non-neutral signals; ties are neutral.
    pub fn majority(signals: &[SignalDirection]) -> Self {
        let bullish = signals.iter().filter(|s| **s == SignalDirection::Bullish).count();
        let bearish = signals.iter().filter(|s| **s == SignalDirection::Bearish).count();
        match bullish.cmp(&bearish) {
            std::cmp::Ordering::Greater => SignalDirection::Bullish,
            std::cmp::Ordering::Less => SignalDirection::Bearish,
            std::cmp::Ordering::Equal => SignalDirection::Neutral,
        }
    }
}

/// Most recent MACD values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Bollinger Bands at the latest candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// (upper - lower) / middle
    pub bandwidth: f64,
    /// Position of the last close within the bands, clamped to [0, 1].
    pub percent_b: f64,
}

/// Stochastic oscillator applied to the RSI series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StochasticRsi {
    pub k: f64,
    pub d: f64,
    pub signal: SignalDirection,
    pub overbought: bool,
    pub oversold: bool,
}

impl Default for StochasticRsi {
    fn default() -> Self {
        Self {
            k: 50.0,
            d: 50.0,
            signal: SignalDirection::Neutral,
            overbought: false,
            oversold: false,
        }
    }
}

/// One price bucket of a volume profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeLevel {
    pub price_low: f64,
    pub price_high: f64,
    /// Bucket midpoint.
    pub price: f64,
    pub volume: f64,
    /// Share of total volume, 0-100.
    pub percentage: f64,
}

/// Volume-at-price histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VolumeProfile {
    pub levels: Vec<VolumeLevel>,
    /// Point of control: midpoint of the highest-volume bucket.
    pub poc: f64,
    pub value_area_high: f64,
    pub value_area_low: f64,
    pub total_volume: f64,
}

/// Fibonacci retracement levels between a low (0%) and a high (100%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FibonacciRetracement {
    pub level0: f64,
    pub level236: f64,
    pub level382: f64,
    pub level500: f64,
    pub level618: f64,
    pub level100: f64,
}

/// How the second swing relates to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionDirection {
    UptrendContinuation,
    UptrendReversal,
    DowntrendContinuation,
    DowntrendReversal,
}

impl ExtensionDirection {
    /// Whether targets are projected above the second swing's end.
    pub fn projects_up(&self) -> bool {
        matches!(
            self,
            ExtensionDirection::UptrendContinuation | ExtensionDirection::UptrendReversal
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionTarget {
    pub ratio: f64,
    pub price: f64,
}

/// Fibonacci extension projection from a two-swing structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FibonacciExtension {
    pub direction: ExtensionDirection,
    /// Ascending when projecting up, descending otherwise.
    pub targets: Vec<ExtensionTarget>,
}

impl FibonacciExtension {
    /// Target price for a given ratio, if projected.
    pub fn target(&self, ratio: f64) -> Option<f64> {
        self.targets
            .iter()
            .find(|t| (t.ratio - ratio).abs() < 1e-9)
            .map(|t| t.price)
    }
}

/// Support levels (descending) and resistance levels (ascending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SupportResistance {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

impl SupportResistance {
    /// Highest support strictly below `price`.
    pub fn nearest_support_below(&self, price: f64) -> Option<f64> {
        self.support.iter().copied().find(|s| *s < price)
    }

    /// Lowest resistance strictly above `price`.
    pub fn nearest_resistance_above(&self, price: f64) -> Option<f64> {
        self.resistance.iter().copied().find(|r| *r > price)
    }

    pub fn level_count(&self) -> usize {
        self.support.len() + self.resistance.len()
    }
}

/// Per-indicator signals and their majority vote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSignals {
    pub rsi: SignalDirection,
    pub macd: SignalDirection,
    pub stoch_rsi: SignalDirection,
    pub overall: SignalDirection,
}

/// Indicator-only view of a candle window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,
    pub macd: Option<MacdValue>,
    pub bollinger: BollingerBands,
    pub stoch_rsi: StochasticRsi,
    pub volume_profile: VolumeProfile,
    pub signals: IndicatorSignals,
}
