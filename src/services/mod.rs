pub mod analysis;

pub use analysis::{analyze_indicators, analyze_price_points};
