//! RSI (Relative Strength Index).
//!
//! Wilder-style running smoothing applied from index 0 (no warmup gap):
//!   avg_gain = (avg_gain*(period-1) + max(0, delta)) / period
//! symmetric for losses; delta at index 0 is zero.
//!
//! RS = avg_gain / max(avg_loss, 1e-9); RSI = 100 - 100/(1+RS).
//!
//! Convention: when both running averages are below `FLAT_EPSILON` the market
//! has shown no movement at all and RSI reads a neutral 50, not the 0 the raw
//! quotient would give. This is the chosen resolution of the index-0
//! ambiguity; a flat series reads 50 throughout.

use crate::domain::ohlc::PricePoint;

/// Guards the RS division when losses have decayed to zero.
pub const LOSS_EPSILON: f64 = 1e-9;

/// Below this, running gain and loss averages count as "no movement".
pub const FLAT_EPSILON: f64 = 1e-12;

pub fn rsi(points: &[PricePoint], period: usize) -> Vec<f64> {
    if period == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(points.len());
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 0..points.len() {
        let delta = if i == 0 {
            0.0
        } else {
            points[i].close - points[i - 1].close
        };

        avg_gain = (avg_gain * (period - 1) as f64 + delta.max(0.0)) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + (-delta).max(0.0)) / period as f64;

        let value = if avg_gain < FLAT_EPSILON && avg_loss < FLAT_EPSILON {
            50.0
        } else {
            let rs = avg_gain / avg_loss.max(LOSS_EPSILON);
            100.0 - 100.0 / (1.0 + rs)
        };
        out.push(value);
    }

    out
}
