//! Leaderboard construction: order many per-symbol outcomes.
//!
//! Successes sort by expected profit percentage descending, ties broken by
//! symbol ascending so output is deterministic. Failures never enter the
//! ranked list but are retained with their reason for the full-results view.

use crate::domain::error::ScanError;
use crate::domain::signal::Analysis;

#[derive(Debug, Clone)]
pub struct RankedAnalysis {
    pub symbol: String,
    pub analysis: Analysis,
}

#[derive(Debug, Clone)]
pub struct ScanFailure {
    pub symbol: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub ranked: Vec<RankedAnalysis>,
    pub failures: Vec<ScanFailure>,
}

impl Leaderboard {
    pub fn top(&self, n: usize) -> &[RankedAnalysis] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn find(&self, symbol: &str) -> Option<&RankedAnalysis> {
        self.ranked.iter().find(|r| r.symbol == symbol)
    }
}

pub fn rank(results: Vec<(String, Result<Analysis, ScanError>)>) -> Leaderboard {
    let mut ranked = Vec::new();
    let mut failures = Vec::new();

    for (symbol, result) in results {
        match result {
            Ok(analysis) => ranked.push(RankedAnalysis { symbol, analysis }),
            Err(err) => failures.push(ScanFailure {
                symbol,
                reason: err.to_string(),
            }),
        }
    }

    ranked.sort_by(|a, b| {
        b.analysis
            .expected_profit_pct
            .total_cmp(&a.analysis.expected_profit_pct)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    Leaderboard { ranked, failures }
}
