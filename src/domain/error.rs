//! Domain error types.

/// Top-level error type for stockscan.
///
/// Every failure is local and recoverable: a per-symbol error never aborts a
/// batch scan, the caller decides whether to skip, log, or surface it.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("insufficient data for {symbol}: have {bars} bars, need {minimum}")]
    InsufficientData {
        symbol: String,
        bars: usize,
        minimum: usize,
    },

    #[error("malformed series for {symbol}: {reason}")]
    MalformedSeries { symbol: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ScanError> for std::process::ExitCode {
    fn from(err: &ScanError) -> Self {
        let code: u8 = match err {
            ScanError::Io(_) => 1,
            ScanError::ConfigParse { .. }
            | ScanError::ConfigMissing { .. }
            | ScanError::ConfigInvalid { .. } => 2,
            ScanError::Data { .. } => 3,
            ScanError::MalformedSeries { .. } => 4,
            ScanError::InsufficientData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
