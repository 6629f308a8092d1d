#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use stockscan::domain::error::ScanError;
pub use stockscan::domain::ohlc::PricePoint;
use stockscan::ports::data_port::DataPort;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PricePoint>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_points(mut self, symbol: &str, points: Vec<PricePoint>) -> Self {
        self.data.insert(symbol.to_string(), points);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_points(&self, symbol: &str) -> Result<Vec<PricePoint>, ScanError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(ScanError::Data {
                reason: reason.clone(),
            });
        }
        self.data
            .get(symbol)
            .cloned()
            .ok_or_else(|| ScanError::Data {
                reason: format!("no data for {}", symbol),
            })
    }

    fn list_symbols(&self) -> Result<Vec<String>, ScanError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}

pub fn ts(day_offset: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + chrono::Duration::days(day_offset)
}

/// Flat bars: open = close, high/low = close ± 0.5.
pub fn make_points(closes: &[f64]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            timestamp: ts(i as i64),
            open: close,
            high: close + 0.5,
            low: close - 0.5,
            close,
        })
        .collect()
}

/// Upward-trending synthetic series: close rises 1/day from `start`,
/// high = close + 0.5, low = close - 0.5, open = close.
pub fn trending_points(start: f64, count: usize) -> Vec<PricePoint> {
    make_points(&(0..count).map(|i| start + i as f64).collect::<Vec<_>>())
}
