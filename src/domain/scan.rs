//! Batch scan orchestration.
//!
//! Iterates a symbol universe sequentially (politeness toward rate-limited
//! data sources is a policy of this loop, not a correctness requirement of
//! the engine — each analysis depends only on its own inputs), fetches each
//! series through the data port, caches it for detail rendering, analyzes,
//! and ranks. A per-symbol failure is recorded and the scan continues; it
//! never aborts the batch.

use crate::domain::config::{AnalysisSettings, RiskConfig};
use crate::domain::error::ScanError;
use crate::domain::ohlc::PriceSeries;
use crate::domain::ranking::{rank, Leaderboard};
use crate::domain::signal::{analyze, Analysis};
use crate::ports::data_port::DataPort;
use std::collections::HashMap;

/// Explicit series-by-symbol cache, owned by the orchestrating caller. The
/// engine itself holds no state between calls.
#[derive(Debug, Default)]
pub struct SeriesCache {
    map: HashMap<String, PriceSeries>,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, series: PriceSeries) {
        self.map.insert(series.symbol().to_string(), series);
    }

    pub fn get(&self, symbol: &str) -> Option<&PriceSeries> {
        self.map.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The built-in NSE universe scanned when no symbols are configured.
pub fn default_universe() -> Vec<String> {
    [
        "RELIANCE.NS",
        "TCS.NS",
        "INFY.NS",
        "HDFCBANK.NS",
        "HDFC.NS",
        "ICICIBANK.NS",
        "LT.NS",
        "KOTAKBANK.NS",
        "SBIN.NS",
        "AXISBANK.NS",
        "BAJAJFINSV.NS",
        "BHARTIARTL.NS",
        "ITC.NS",
        "HINDUNILVR.NS",
        "MARUTI.NS",
        "TATAMOTORS.NS",
        "ONGC.NS",
        "POWERGRID.NS",
        "NTPC.NS",
        "BPCL.NS",
        "EICHERMOT.NS",
        "ADANIENT.NS",
        "ASIANPAINT.NS",
        "DIVISLAB.NS",
        "SUNPHARMA.NS",
        "DRREDDY.NS",
        "TECHM.NS",
        "WIPRO.NS",
        "JSWSTEEL.NS",
        "TATASTEEL.NS",
        "ULTRACEMCO.NS",
        "HEROMOTOCO.NS",
        "GRASIM.NS",
        "CIPLA.NS",
        "BRITANNIA.NS",
        "TITAN.NS",
        "HCLTECH.NS",
        "COALINDIA.NS",
        "HDFCLIFE.NS",
        "ICICIPRULI.NS",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn analyze_symbol(
    data_port: &dyn DataPort,
    symbol: &str,
    risk: &RiskConfig,
    settings: &AnalysisSettings,
    cache: &mut SeriesCache,
) -> Result<Analysis, ScanError> {
    let points = data_port.fetch_points(symbol)?;
    let series = PriceSeries::new(symbol, points)?;
    let analysis = analyze(&series, risk, settings)?;
    cache.insert(series);
    Ok(analysis)
}

pub fn run_scan(
    data_port: &dyn DataPort,
    symbols: &[String],
    risk: &RiskConfig,
    settings: &AnalysisSettings,
    cache: &mut SeriesCache,
) -> Leaderboard {
    let mut results = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        let outcome = analyze_symbol(data_port, symbol, risk, settings, cache);
        if let Err(e) = &outcome {
            eprintln!("Warning: skipping {} ({})", symbol, e);
        }
        results.push((symbol.clone(), outcome));
    }

    rank(results)
}
