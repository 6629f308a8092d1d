//! CSV file data adapter.
//!
//! One `SYMBOL.csv` per symbol under a data directory, columns
//! `timestamp,open,high,low,close`. Rows with blank price fields (how vendor
//! nulls land in an export) are dropped before the points reach the core;
//! non-blank but unparsable values are an error. Timestamps accept
//! `%Y-%m-%d %H:%M:%S` (intraday exports) or bare `%Y-%m-%d`.

use crate::domain::error::ScanError;
use crate::domain::ohlc::PricePoint;
use crate::ports::data_port::DataPort;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ScanError> {
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(ts);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| ScanError::Data {
            reason: format!("invalid timestamp {:?}: {}", value, e),
        })
}

fn parse_price(record: &csv::StringRecord, index: usize, name: &str) -> Result<Option<f64>, ScanError> {
    let field = record.get(index).ok_or_else(|| ScanError::Data {
        reason: format!("missing {} column", name),
    })?;

    if field.trim().is_empty() {
        // Vendor null; the whole row is dropped by the caller.
        return Ok(None);
    }

    field
        .trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|e| ScanError::Data {
            reason: format!("invalid {} value {:?}: {}", name, field, e),
        })
}

impl DataPort for CsvAdapter {
    fn fetch_points(&self, symbol: &str) -> Result<Vec<PricePoint>, ScanError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| ScanError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| ScanError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let ts_str = record.get(0).ok_or_else(|| ScanError::Data {
                reason: "missing timestamp column".into(),
            })?;
            let timestamp = parse_timestamp(ts_str)?;

            let open = parse_price(&record, 1, "open")?;
            let high = parse_price(&record, 2, "high")?;
            let low = parse_price(&record, 3, "low")?;
            let close = parse_price(&record, 4, "close")?;

            match (open, high, low, close) {
                (Some(open), Some(high), Some(low), Some(close)) => points.push(PricePoint {
                    timestamp,
                    open,
                    high,
                    low,
                    close,
                }),
                // Any blank field voids the row.
                _ => continue,
            }
        }

        points.sort_by_key(|p| p.timestamp);
        Ok(points)
    }

    fn list_symbols(&self) -> Result<Vec<String>, ScanError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| ScanError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ScanError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(symbol) = name_str.strip_suffix(".csv") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
