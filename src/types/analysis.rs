use serde::{Deserialize, Serialize};

use super::TimeHorizon;

/// Human-readable derivation of each entry level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryMethods {
    pub conservative: String,
    pub moderate: String,
    pub aggressive: String,
}

/// Suggested entry prices, from most to least patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoints {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
    pub methods: EntryMethods,
}

/// How a stop-loss level is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopLossMethod {
    Percentage,
    #[default]
    Atr,
    Support,
}

impl StopLossMethod {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "percentage" | "percent" | "pct" => Some(Self::Percentage),
            "atr" => Some(Self::Atr),
            "support" => Some(Self::Support),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Atr => "atr",
            Self::Support => "support",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLoss {
    pub price: f64,
    /// Distance below entry as a percentage of entry.
    pub percentage: f64,
    pub method: StopLossMethod,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetMethods {
    pub target1: String,
    pub target2: String,
    pub target3: String,
}

/// Ascending profit targets with the realized risk:reward of the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitTargets {
    pub target1: f64,
    pub target2: f64,
    pub target3: f64,
    /// NaN when realized risk is not positive; serialized as `null`.
    pub risk_reward_ratio: f64,
    pub methods: TargetMethods,
}

impl ProfitTargets {
    /// Risk:reward if it is a usable number.
    pub fn risk_reward(&self) -> Option<f64> {
        self.risk_reward_ratio.is_finite().then_some(self.risk_reward_ratio)
    }
}

/// Trade plan produced for a candle window and current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAnalysis {
    pub entry_points: EntryPoints,
    pub stop_loss: StopLoss,
    pub profit_targets: ProfitTargets,
    pub time_horizon: TimeHorizon,
    pub risk_assessment: String,
    /// 0.0 - 1.0
    pub confidence: f64,
}

/// Analysis or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub analysis: Option<PriceAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<E: std::fmt::Display> From<Result<PriceAnalysis, E>> for AnalysisOutcome {
    fn from(result: Result<PriceAnalysis, E>) -> Self {
        match result {
            Ok(analysis) => Self {
                analysis: Some(analysis),
                error: None,
            },
            Err(e) => Self {
                analysis: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Structural quality of a candle series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesReport {
    pub candle_count: usize,
    /// Candles violating the OHLC envelope.
    pub malformed_candles: usize,
    /// Timestamps lower than their predecessor.
    pub out_of_order: usize,
    pub duplicate_timestamps: usize,
    pub valid: bool,
    /// 1.0 means no issues.
    pub quality_score: f64,
}
