//! OHLC price series representation.
//!
//! `PriceSeries::new` is the well-formedness boundary: timestamps strictly
//! increasing, every OHLC field finite and positive. Whatever upstream source
//! produced the points (vendor JSON with nulls, CSV with blank cells) must have
//! filtered bad rows before construction; anything that slips through fails
//! fast here instead of leaking NaN into a recommendation.

use crate::domain::error::ScanError;
use chrono::NaiveDateTime;

/// One sampling instant of an equity price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePoint {
    /// |high - low| of this bar. A crude intrabar range, used as a volatility
    /// proxy in place of a true ATR (no gap-from-previous-close term).
    pub fn intrabar_range(&self) -> f64 {
        (self.high - self.low).abs()
    }
}

/// A validated, ordered, non-empty OHLC series for one symbol.
///
/// Immutable once built; indicator and signal code can rely on the invariants
/// without re-checking.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self, ScanError> {
        let symbol = symbol.into();

        if points.is_empty() {
            return Err(ScanError::MalformedSeries {
                symbol,
                reason: "empty series".into(),
            });
        }

        for (i, p) in points.iter().enumerate() {
            for (name, value) in [
                ("open", p.open),
                ("high", p.high),
                ("low", p.low),
                ("close", p.close),
            ] {
                if !value.is_finite() {
                    return Err(ScanError::MalformedSeries {
                        symbol,
                        reason: format!("non-finite {} at index {}", name, i),
                    });
                }
                if value <= 0.0 {
                    return Err(ScanError::MalformedSeries {
                        symbol,
                        reason: format!("non-positive {} at index {}", name, i),
                    });
                }
            }

            if i > 0 && points[i - 1].timestamp >= p.timestamp {
                return Err(ScanError::MalformedSeries {
                    symbol,
                    reason: format!("timestamps not strictly increasing at index {}", i),
                });
            }
        }

        Ok(Self { symbol, points })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction rejects empty series; kept for clippy's sake.
        self.points.is_empty()
    }

    /// Latest point. Safe because the series is never empty.
    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }
}
