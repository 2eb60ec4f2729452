use std::env;
use std::str::FromStr;

/// Tunable periods and windows for the analysis engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub rsi_period: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub stoch_rsi_period: usize,
    pub stoch_period: usize,
    pub volume_profile_bins: usize,
    pub atr_period: usize,
    /// Half-width of the pivot window for support/resistance.
    pub support_lookback: usize,
    /// Candles used to measure the recent swing high/low.
    pub swing_window: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            stoch_rsi_period: 14,
            stoch_period: 14,
            volume_profile_bins: 20,
            atr_period: 14,
            support_lookback: 5,
            swing_window: 20,
        }
    }
}

impl AnalysisSettings {
    /// Defaults overridden by `ANALYSIS_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            rsi_period: positive_var("ANALYSIS_RSI_PERIOD", defaults.rsi_period),
            bollinger_period: positive_var("ANALYSIS_BOLLINGER_PERIOD", defaults.bollinger_period),
            bollinger_std_dev: env_var("ANALYSIS_BOLLINGER_STD_DEV", defaults.bollinger_std_dev),
            stoch_rsi_period: positive_var("ANALYSIS_STOCH_RSI_PERIOD", defaults.stoch_rsi_period),
            stoch_period: positive_var("ANALYSIS_STOCH_PERIOD", defaults.stoch_period),
            volume_profile_bins: positive_var(
                "ANALYSIS_VOLUME_PROFILE_BINS",
                defaults.volume_profile_bins,
            ),
            atr_period: positive_var("ANALYSIS_ATR_PERIOD", defaults.atr_period),
            support_lookback: positive_var("ANALYSIS_SUPPORT_LOOKBACK", defaults.support_lookback),
            swing_window: positive_var("ANALYSIS_SWING_WINDOW", defaults.swing_window),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Engine parameters.
    pub analysis: AnalysisSettings,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_var("PORT", 3002),
            analysis: AnalysisSettings::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Zero periods would make every indicator degenerate.
fn positive_var(key: &str, default: usize) -> usize {
    match env_var(key, default) {
        0 => default,
        v => v,
    }
}
