//! Bollinger Bands.
//!
//! Middle = prefix-window SMA; upper/lower = middle ± multiplier × population
//! standard deviation over the same windowed slice (divide by slice length,
//! not length-1). Bands are symmetric around the middle by construction.

use crate::domain::ohlc::PricePoint;

pub const DEFAULT_WINDOW: usize = 20;
pub const DEFAULT_STDDEV_MULT: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

pub fn bollinger(points: &[PricePoint], window: usize, mult: f64) -> BollingerSeries {
    if window == 0 {
        return BollingerSeries {
            upper: Vec::new(),
            middle: Vec::new(),
            lower: Vec::new(),
        };
    }

    let mut upper = Vec::with_capacity(points.len());
    let mut middle = Vec::with_capacity(points.len());
    let mut lower = Vec::with_capacity(points.len());

    for i in 0..points.len() {
        let start = (i + 1).saturating_sub(window);
        let slice = &points[start..=i];

        let mean: f64 = slice.iter().map(|p| p.close).sum::<f64>() / slice.len() as f64;
        let variance: f64 = slice
            .iter()
            .map(|p| {
                let diff = p.close - mean;
                diff * diff
            })
            .sum::<f64>()
            / slice.len() as f64;
        let stddev = variance.sqrt();

        middle.push(mean);
        upper.push(mean + mult * stddev);
        lower.push(mean - mult * stddev);
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

pub fn bollinger_default(points: &[PricePoint]) -> BollingerSeries {
    bollinger(points, DEFAULT_WINDOW, DEFAULT_STDDEV_MULT)
}
