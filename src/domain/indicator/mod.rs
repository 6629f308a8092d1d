//! Technical indicator library.
//!
//! Pure array-to-array transforms over a price series' closes (plus the
//! intrabar range of the latest point as a volatility proxy). Every function
//! is deterministic, allocates fresh output, and never mutates its input.
//! Outputs are index-aligned with the input with no warmup gaps: early
//! indices are computed over whatever prefix is available. Trading semantics
//! live in [`crate::domain::signal`], not here.

pub mod sma;
pub mod ema;
pub mod rsi;
pub mod macd;
pub mod bollinger;

pub use bollinger::{bollinger, bollinger_default, BollingerSeries};
pub use ema::{ema, ema_values};
pub use macd::{macd, macd_default, MacdSeries};
pub use rsi::rsi;
pub use sma::sma;

use crate::domain::ohlc::PriceSeries;

pub const SMA_SHORT_WINDOW: usize = 20;
pub const SMA_LONG_WINDOW: usize = 50;
pub const RSI_PERIOD: usize = 14;

/// Per-series derived arrays, index-aligned with the input series.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    pub sma20: Vec<f64>,
    pub sma50: Vec<f64>,
    pub rsi14: Vec<f64>,
    pub macd: MacdSeries,
    pub bollinger: BollingerSeries,
}

/// Never fails for a series of length >= 1; windows degrade gracefully over
/// the available prefix.
pub fn compute_indicators(series: &PriceSeries) -> IndicatorSet {
    let points = series.points();
    IndicatorSet {
        sma20: sma(points, SMA_SHORT_WINDOW),
        sma50: sma(points, SMA_LONG_WINDOW),
        rsi14: rsi(points, RSI_PERIOD),
        macd: macd_default(points),
        bollinger: bollinger_default(points),
    }
}

/// |high - low| of the most recent point. A crude intrabar range standing in
/// for ATR; it has no gap-from-previous-close term.
pub fn volatility_proxy(series: &PriceSeries) -> f64 {
    series.last().intrabar_range()
}
