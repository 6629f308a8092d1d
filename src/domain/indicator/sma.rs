//! Simple Moving Average over close prices.
//!
//! Prefix-window rule: index i averages closes over [max(0, i-window+1), i],
//! so every input point gets an output and early indices average a
//! shorter-than-window prefix. This trades strict indicator purity for
//! always-defined outputs; the signal engine decides when a value is mature
//! enough to act on.

use crate::domain::ohlc::PricePoint;

pub fn sma(points: &[PricePoint], window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(points.len());
    let mut sum = 0.0;

    for i in 0..points.len() {
        sum += points[i].close;
        if i >= window {
            sum -= points[i - window].close;
        }
        let slice_len = (i + 1).min(window);
        out.push(sum / slice_len as f64);
    }

    out
}
