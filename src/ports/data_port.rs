//! Price data access port trait.
//!
//! Implementations must deliver points already filtered of null/blank OHLC
//! fields; `PriceSeries::new` enforces the rest of the well-formedness
//! contract.

use crate::domain::error::ScanError;
use crate::domain::ohlc::PricePoint;

pub trait DataPort {
    fn fetch_points(&self, symbol: &str) -> Result<Vec<PricePoint>, ScanError>;

    fn list_symbols(&self) -> Result<Vec<String>, ScanError>;
}
