//! Price analysis service module.
//!
//! Normalizes candle history, computes technical indicators, detects
//! support/resistance and plans entry, stop-loss and target levels. Every
//! function here is synchronous and free of shared state.

pub mod engine;
pub mod indicators;
pub mod levels;
pub mod planner;
pub mod series;

pub use engine::{analyze_indicators, analyze_price_points, confidence, MIN_CANDLES};
pub use levels::support_resistance;
pub use planner::{entry_points, profit_targets, stop_loss};
pub use series::{convert_candles, is_valid_series, validate_series};
