//! Exponential Moving Average.
//!
//! k = 2/(span+1); first output equals the first input exactly (no separate
//! seed), then EMA[i] = value[i]*k + EMA[i-1]*(1-k). One output per input.

use crate::domain::ohlc::PricePoint;

/// EMA over raw values. Also used for the MACD signal line, which smooths the
/// MACD line itself rather than close prices.
pub fn ema_values(values: &[f64], span: usize) -> Vec<f64> {
    if span == 0 {
        return Vec::new();
    }

    let k = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = 0.0;

    for (i, &value) in values.iter().enumerate() {
        prev = if i == 0 {
            value
        } else {
            value * k + prev * (1.0 - k)
        };
        out.push(prev);
    }

    out
}

pub fn ema(points: &[PricePoint], span: usize) -> Vec<f64> {
    let closes: Vec<f64> = points.iter().map(|p| p.close).collect();
    ema_values(&closes, span)
}
