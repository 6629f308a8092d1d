//! Plain-text report adapter: leaderboard table, full results, and
//! per-symbol detail. All numbers arrive pre-rounded from the engine; this
//! layer only formats.

use crate::domain::error::ScanError;
use crate::domain::ranking::Leaderboard;
use crate::domain::signal::Analysis;
use crate::ports::report_port::ReportPort;
use std::io::Write;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for TextReportAdapter {
    fn write_leaderboard(
        &self,
        board: &Leaderboard,
        top: usize,
        out: &mut dyn Write,
    ) -> Result<(), ScanError> {
        writeln!(out, "Top picks")?;
        writeln!(
            out,
            "{:<14} {:<5} {:>10} {:>10} {:>10} {:>8} {:>8}",
            "SYMBOL", "REC", "ENTRY", "TARGET", "STOP", "QTY", "EXP%"
        )?;

        if board.ranked.is_empty() {
            writeln!(out, "(no results)")?;
        }

        for entry in board.top(top) {
            let a = &entry.analysis;
            writeln!(
                out,
                "{:<14} {:<5} {:>10.2} {:>10.2} {:>10.2} {:>8} {:>7.2}%",
                entry.symbol,
                a.recommendation,
                a.entry,
                a.target,
                a.stop,
                a.quantity,
                a.expected_profit_pct
            )?;
        }

        writeln!(out)?;
        writeln!(out, "All results")?;
        for entry in &board.ranked {
            writeln!(
                out,
                "{:<14} {:<5} {:>7.2}%",
                entry.symbol, entry.analysis.recommendation, entry.analysis.expected_profit_pct
            )?;
        }
        for failure in &board.failures {
            writeln!(out, "{:<14} error: {}", failure.symbol, failure.reason)?;
        }

        Ok(())
    }

    fn write_detail(
        &self,
        symbol: &str,
        analysis: &Analysis,
        out: &mut dyn Write,
    ) -> Result<(), ScanError> {
        writeln!(out, "Symbol: {}", symbol)?;
        writeln!(out, "Recommendation: {}", analysis.recommendation)?;
        writeln!(out, "Last close: {:.2}", analysis.last)?;
        writeln!(out, "Entry: {:.2}", analysis.entry)?;
        writeln!(out, "Target: {:.2}", analysis.target)?;
        writeln!(out, "Stop-loss: {:.2}", analysis.stop)?;
        writeln!(
            out,
            "Qty: {} (~{:.2})",
            analysis.quantity, analysis.position_value
        )?;
        writeln!(out, "Confidence proxy: {}%", analysis.confidence_pct())?;
        writeln!(out)?;
        writeln!(out, "Reasons:")?;
        for reason in &analysis.reasons {
            writeln!(out, "- {}", reason)?;
        }
        Ok(())
    }
}
