//! Report generation port trait.

use crate::domain::error::ScanError;
use crate::domain::ranking::Leaderboard;
use crate::domain::signal::Analysis;
use std::io::Write;

/// Port for rendering scan results. Values in an [`Analysis`] are already
/// display-ready; implementations do no further numeric work.
pub trait ReportPort {
    /// Render the top-N leaderboard plus the full results (failures
    /// included).
    fn write_leaderboard(
        &self,
        board: &Leaderboard,
        top: usize,
        out: &mut dyn Write,
    ) -> Result<(), ScanError>;

    /// Render the per-symbol detail view with the reason list verbatim.
    fn write_detail(
        &self,
        symbol: &str,
        analysis: &Analysis,
        out: &mut dyn Write,
    ) -> Result<(), ScanError>;
}
