//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config::{build_risk_config, validate_scan_config, AnalysisSettings};
use crate::domain::error::ScanError;
use crate::domain::ohlc::PriceSeries;
use crate::domain::scan::{default_universe, run_scan, SeriesCache};
use crate::domain::signal::analyze;
use crate::domain::universe::parse_symbols;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "stockscan", about = "Technical market scanner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a symbol universe and print the leaderboard
    Scan {
        #[arg(short, long)]
        config: PathBuf,
        /// Comma-separated symbol list overriding the config/default universe
        #[arg(long)]
        symbols: Option<String>,
        /// Leaderboard size override
        #[arg(long)]
        top: Option<usize>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Analyze a single symbol and print the detail view
    Analyze {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: String,
    },
    /// List symbols available in the data directory
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Scan {
            config,
            symbols,
            top,
            output,
        } => run_scan_cmd(&config, symbols.as_deref(), top, output.as_ref()),
        Command::Analyze { config, symbol } => run_analyze(&config, &symbol),
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Validate { config } => run_validate(&config),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = ScanError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn data_dir(adapter: &dyn ConfigPort) -> Result<String, ScanError> {
    adapter
        .get_string("scan", "data_dir")
        .ok_or_else(|| ScanError::ConfigMissing {
            section: "scan".into(),
            key: "data_dir".into(),
        })
}

fn resolve_symbols(
    override_list: Option<&str>,
    adapter: &dyn ConfigPort,
) -> Result<Vec<String>, ScanError> {
    let configured = adapter.get_string("scan", "symbols");
    let source = override_list.or(configured.as_deref());

    match source {
        Some(list) => parse_symbols(list).map_err(|e| ScanError::ConfigInvalid {
            section: "scan".into(),
            key: "symbols".into(),
            reason: e.to_string(),
        }),
        None => Ok(default_universe()),
    }
}

fn run_scan_cmd(
    config_path: &PathBuf,
    symbols_override: Option<&str>,
    top_override: Option<usize>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_scan_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let risk = match build_risk_config(&adapter) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let dir = match data_dir(&adapter) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let symbols = match resolve_symbols(symbols_override, &adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let top = top_override.unwrap_or_else(|| adapter.get_int("scan", "top", 10) as usize);
    let settings = AnalysisSettings::default();
    let data_port = CsvAdapter::new(dir.clone().into());

    eprintln!("Scanning {} symbols from {}...", symbols.len(), dir);
    let mut cache = SeriesCache::new();
    let board = run_scan(&data_port, &symbols, &risk, &settings, &mut cache);
    eprintln!(
        "Analyzed {} symbols, {} failed",
        board.ranked.len(),
        board.failures.len()
    );

    let report = TextReportAdapter::new();
    let result = match output_path {
        Some(path) => File::create(path)
            .map_err(ScanError::from)
            .and_then(|mut f| report.write_leaderboard(&board, top, &mut f)),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            report.write_leaderboard(&board, top, &mut handle)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Some(path) = output_path {
        eprintln!("Report written to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_analyze(config_path: &PathBuf, symbol: &str) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let outcome = (|| -> Result<(), ScanError> {
        let risk = build_risk_config(&adapter)?;
        let dir = data_dir(&adapter)?;
        let data_port = CsvAdapter::new(dir.into());

        let points = data_port.fetch_points(symbol)?;
        let series = PriceSeries::new(symbol, points)?;
        let analysis = analyze(&series, &risk, &AnalysisSettings::default())?;

        let report = TextReportAdapter::new();
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        report.write_detail(symbol, &analysis, &mut handle)?;
        Ok(())
    })();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_list_symbols(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let outcome = (|| -> Result<(), ScanError> {
        let dir = data_dir(&adapter)?;
        let data_port = CsvAdapter::new(dir.into());
        let symbols = data_port.list_symbols()?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for symbol in symbols {
            writeln!(handle, "{}", symbol)?;
        }
        Ok(())
    })();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    match validate_scan_config(&adapter) {
        Ok(()) => {
            eprintln!("Config OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    #[test]
    fn resolve_symbols_prefers_override() {
        let adapter =
            FileConfigAdapter::from_string("[scan]\nsymbols = TCS.NS,INFY.NS\n").unwrap();
        let symbols = resolve_symbols(Some("SBIN.NS"), &adapter).unwrap();
        assert_eq!(symbols, vec!["SBIN.NS"]);
    }

    #[test]
    fn resolve_symbols_falls_back_to_config() {
        let adapter =
            FileConfigAdapter::from_string("[scan]\nsymbols = TCS.NS,INFY.NS\n").unwrap();
        let symbols = resolve_symbols(None, &adapter).unwrap();
        assert_eq!(symbols, vec!["TCS.NS", "INFY.NS"]);
    }

    #[test]
    fn resolve_symbols_defaults_to_builtin_universe() {
        let adapter = FileConfigAdapter::from_string("[scan]\n").unwrap();
        let symbols = resolve_symbols(None, &adapter).unwrap();
        assert_eq!(symbols.len(), 40);
    }

    #[test]
    fn resolve_symbols_reports_bad_list() {
        let adapter = FileConfigAdapter::from_string("[scan]\n").unwrap();
        let err = resolve_symbols(Some("TCS.NS,,INFY.NS"), &adapter).unwrap_err();
        assert!(matches!(err, ScanError::ConfigInvalid { .. }));
    }
}
