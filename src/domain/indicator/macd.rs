//! MACD (Moving Average Convergence Divergence).
//!
//! Line = EMA(fast) - EMA(slow), index-aligned.
//! Signal = EMA of the line itself with span `signal`.
//! Histogram = Line - Signal.
//!
//! Default parameters: fast=12, slow=26, signal=9. With first-value-seeded
//! EMAs every index is defined; early values lean on short history.

use crate::domain::indicator::ema::{ema, ema_values};
use crate::domain::ohlc::PricePoint;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

pub fn macd(points: &[PricePoint], fast: usize, slow: usize, signal_span: usize) -> MacdSeries {
    if fast == 0 || slow == 0 || signal_span == 0 {
        return MacdSeries {
            line: Vec::new(),
            signal: Vec::new(),
            histogram: Vec::new(),
        };
    }

    let ema_fast = ema(points, fast);
    let ema_slow = ema(points, slow);

    let line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();
    let signal = ema_values(&line, signal_span);
    let histogram: Vec<f64> = line.iter().zip(&signal).map(|(l, s)| l - s).collect();

    MacdSeries {
        line,
        signal,
        histogram,
    }
}

pub fn macd_default(points: &[PricePoint]) -> MacdSeries {
    macd(points, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}
