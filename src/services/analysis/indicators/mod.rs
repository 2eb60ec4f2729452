//! Technical indicator implementations.
//!
//! Every indicator is a pure function over a price or candle window. Short or
//! empty input yields a documented default instead of an error.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod fibonacci;
pub mod macd;
pub mod rsi;
pub mod stochastic_rsi;
pub mod volume_profile;

pub use atr::{atr, true_range};
pub use bollinger::bollinger_bands;
pub use ema::{ema, latest_ema, sma};
pub use fibonacci::{fibonacci_extension, fibonacci_retracement};
pub use macd::macd;
pub use rsi::{rsi, rsi_series};
pub use stochastic_rsi::stochastic_rsi;
pub use volume_profile::volume_profile;
