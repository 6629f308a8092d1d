//! Signal engine: one price series + risk config -> one `Analysis`.
//!
//! Four independent ±1 votes (trend, momentum, MACD state, Bollinger
//! position) evaluated in a fixed order produce an integer score in [-4, 4];
//! hard cutoffs at ±2 map the score to BUY/SELL/HOLD. Price levels and
//! position size follow, all display-ready (rounded to 2 decimals,
//! half-away-from-zero).

use crate::domain::config::{AnalysisSettings, RiskConfig};
use crate::domain::error::ScanError;
use crate::domain::indicator::{compute_indicators, volatility_proxy};
use crate::domain::ohlc::PriceSeries;
use std::fmt;

pub const BUY_THRESHOLD: i32 = 2;
pub const SELL_THRESHOLD: i32 = -2;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Discount applied to the last close for a BUY entry, modeling a limit order
/// slightly below market.
pub const BUY_ENTRY_DISCOUNT: f64 = 0.995;

/// Flat 5% stop below the last close, independent of trade direction. A
/// deliberate simplification preserved from the original design.
pub const STOP_FRACTION: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recommendation::Buy => "BUY",
            Recommendation::Sell => "SELL",
            Recommendation::Hold => "HOLD",
        };
        f.pad(label)
    }
}

/// The engine's output for one symbol. Constructed fresh per call; immutable.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub last: f64,
    pub sma20: f64,
    /// None when the series is shorter than the trend window; the trend vote
    /// is then skipped rather than cast against.
    pub sma50: Option<f64>,
    pub rsi14: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
    pub bollinger_lower: f64,
    pub bollinger_upper: f64,
    pub volatility_proxy: f64,
    pub score: i32,
    pub recommendation: Recommendation,
    pub entry: f64,
    pub stop: f64,
    pub target: f64,
    pub quantity: u64,
    pub position_value: f64,
    pub expected_profit_pct: f64,
    /// Rationale strings in rule evaluation order, ready to show verbatim.
    pub reasons: Vec<String>,
}

impl Analysis {
    /// Confidence proxy shown in the detail view: 50% at score 0, ±10 points
    /// per vote.
    pub fn confidence_pct(&self) -> i32 {
        50 + self.score * 10
    }
}

/// Round to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Analyze one series against a risk configuration.
///
/// Series shorter than `settings.min_bars` yield `InsufficientData` — a typed
/// outcome, never a partially populated `Analysis`.
pub fn analyze(
    series: &PriceSeries,
    risk: &RiskConfig,
    settings: &AnalysisSettings,
) -> Result<Analysis, ScanError> {
    if series.len() < settings.min_bars {
        return Err(ScanError::InsufficientData {
            symbol: series.symbol().to_string(),
            bars: series.len(),
            minimum: settings.min_bars,
        });
    }

    let set = compute_indicators(series);
    let last = series.last().close;
    let sma20 = *set.sma20.last().unwrap_or(&last);

    // A prefix average over far fewer than trend_window points is not a trend
    // signal; treat the snapshot as undefined below that length.
    let sma50 = if series.len() >= settings.trend_window {
        set.sma50.last().copied()
    } else {
        None
    };
    let rsi14 = *set.rsi14.last().unwrap_or(&50.0);
    let macd_line = *set.macd.line.last().unwrap_or(&0.0);
    let macd_signal = *set.macd.signal.last().unwrap_or(&0.0);
    let bollinger_lower = *set.bollinger.lower.last().unwrap_or(&last);
    let bollinger_upper = *set.bollinger.upper.last().unwrap_or(&last);

    let mut score: i32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // 1. Trend: last close vs SMA50.
    match sma50 {
        Some(value) if last > value => {
            score += 1;
            reasons.push("Price above 50 SMA (uptrend)".into());
        }
        Some(_) => {
            score -= 1;
            reasons.push("Price below 50 SMA (downtrend)".into());
        }
        None => {
            reasons.push(format!(
                "Fewer than {} bars, trend not assessed",
                settings.trend_window
            ));
        }
    }

    // 2. Momentum: RSI14.
    if rsi14 < RSI_OVERSOLD {
        score += 1;
        reasons.push("RSI < 30 (oversold)".into());
    } else if rsi14 > RSI_OVERBOUGHT {
        score -= 1;
        reasons.push("RSI > 70 (overbought)".into());
    } else {
        reasons.push(format!("RSI {:.1} (neutral)", rsi14));
    }

    // 3. MACD line vs signal line.
    if macd_line > macd_signal {
        score += 1;
        reasons.push("MACD bullish".into());
    } else {
        score -= 1;
        reasons.push("MACD bearish".into());
    }

    // 4. Bollinger position. Lower band checked first, so a zero-width band
    // counts as value, not extended.
    if last <= bollinger_lower {
        score += 1;
        reasons.push("Price near lower Bollinger (value)".into());
    } else if last >= bollinger_upper {
        score -= 1;
        reasons.push("Price near upper Bollinger (extended)".into());
    } else {
        reasons.push("Price within Bollinger bands".into());
    }

    let recommendation = if score >= BUY_THRESHOLD {
        Recommendation::Buy
    } else if score <= SELL_THRESHOLD {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    };

    let entry = if recommendation == Recommendation::Buy {
        round2(last * BUY_ENTRY_DISCOUNT)
    } else {
        last
    };
    let stop = round2(last * STOP_FRACTION);
    let target = round2(last * (1.0 + risk.target_pct / 100.0));

    let risk_amount = risk.capital * risk.risk_pct / 100.0;
    let per_share_risk = (entry - stop).abs().max(settings.per_share_risk_floor);
    // Quantity 0 is a valid outcome: the risk budget can be smaller than the
    // per-share risk.
    let quantity = (risk_amount / per_share_risk).floor() as u64;
    let position_value = round2(quantity as f64 * entry);
    let expected_profit_pct = round2((target - entry) / entry * 100.0);

    Ok(Analysis {
        last,
        sma20,
        sma50,
        rsi14,
        macd_line,
        macd_signal,
        bollinger_lower,
        bollinger_upper,
        volatility_proxy: volatility_proxy(series),
        score,
        recommendation,
        entry,
        stop,
        target,
        quantity,
        position_value,
        expected_profit_pct,
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ohlc::PricePoint;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_series(closes: &[f64]) -> PriceSeries {
        let points: Vec<PricePoint> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                timestamp: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
                    + chrono::Duration::days(i as i64),
                open: close,
                high: close + 0.5,
                low: close - 0.5,
                close,
            })
            .collect();
        PriceSeries::new("TEST", points).unwrap()
    }

    fn defaults() -> (RiskConfig, AnalysisSettings) {
        (RiskConfig::default(), AnalysisSettings::default())
    }

    #[test]
    fn short_series_is_insufficient_data() {
        let (risk, settings) = defaults();
        let series = make_series(&[100.0, 101.0, 102.0]);
        let err = analyze(&series, &risk, &settings).unwrap_err();
        assert!(matches!(
            err,
            ScanError::InsufficientData { bars: 3, minimum: 15, .. }
        ));
    }

    #[test]
    fn flat_series_holds_with_neutral_votes() {
        let (risk, settings) = defaults();
        let series = make_series(&[100.0; 30]);
        let analysis = analyze(&series, &risk, &settings).unwrap();

        // Trend skipped (30 < 50 bars), RSI neutral 50, MACD flat reads
        // bearish, zero-width band reads value: votes cancel to 0.
        assert!(analysis.sma50.is_none());
        assert_relative_eq!(analysis.rsi14, 50.0);
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.recommendation, Recommendation::Hold);
        assert_eq!(analysis.reasons.len(), 4);
    }

    #[test]
    fn uptrend_series_never_sells() {
        let (risk, settings) = defaults();
        let closes: Vec<f64> = (0..60).map(|i| 101.0 + i as f64).collect();
        let series = make_series(&closes);
        let analysis = analyze(&series, &risk, &settings).unwrap();

        assert_relative_eq!(analysis.last, 160.0);
        assert!(analysis.sma50.is_some());
        assert!(analysis.last > analysis.sma50.unwrap());
        assert!(analysis.macd_line > 0.0);
        assert_ne!(analysis.recommendation, Recommendation::Sell);
    }

    #[test]
    fn score_stays_within_vote_bounds() {
        let (risk, settings) = defaults();
        for closes in [
            (0..60).map(|i| 100.0 + i as f64).collect::<Vec<_>>(),
            (0..60).map(|i| 200.0 - i as f64 * 2.0).collect::<Vec<_>>(),
            (0..60).map(|i| 100.0 + ((i % 3) as f64)).collect::<Vec<_>>(),
        ] {
            let analysis = analyze(&make_series(&closes), &risk, &settings).unwrap();
            assert!((-4..=4).contains(&analysis.score));
        }
    }

    #[test]
    fn recommendation_thresholds_are_exact() {
        let (risk, settings) = defaults();
        let closes: Vec<f64> = (0..60).map(|i| 200.0 - i as f64 * 2.0).collect();
        let analysis = analyze(&make_series(&closes), &risk, &settings).unwrap();

        match analysis.recommendation {
            Recommendation::Buy => assert!(analysis.score >= 2),
            Recommendation::Sell => assert!(analysis.score <= -2),
            Recommendation::Hold => assert!((-1..=1).contains(&analysis.score)),
        }
    }

    #[test]
    fn hold_entry_is_last_close_unrounded() {
        let (risk, settings) = defaults();
        let series = make_series(&[100.0; 30]);
        let analysis = analyze(&series, &risk, &settings).unwrap();

        assert_eq!(analysis.recommendation, Recommendation::Hold);
        assert_relative_eq!(analysis.entry, 100.0);
        assert_relative_eq!(analysis.stop, 95.0);
        assert_relative_eq!(analysis.target, 112.0);
        assert_relative_eq!(analysis.expected_profit_pct, 12.0);
    }

    #[test]
    fn buy_entry_is_discounted() {
        let (risk, settings) = defaults();
        // Strong downtrend into oversold territory with price under the lower
        // band: oversold +1, value +1, downtrend -1, MACD bearish -1 is a
        // wash, so push score up by staying under 50 bars (trend skipped).
        let mut closes: Vec<f64> = vec![100.0; 20];
        closes.extend((0..25).map(|i| 100.0 - (i as f64 + 1.0) * 2.0));
        let series = make_series(&closes);
        let analysis = analyze(&series, &risk, &settings).unwrap();

        if analysis.recommendation == Recommendation::Buy {
            assert_relative_eq!(
                analysis.entry,
                (analysis.last * 0.995 * 100.0).round() / 100.0
            );
        } else {
            // Whatever the outcome, entry/stop relationships still hold.
            assert_relative_eq!(analysis.entry, analysis.last);
        }
        assert!(analysis.entry > analysis.stop);
    }

    #[test]
    fn position_sizing_floors_quantity() {
        let (mut risk, settings) = defaults();
        risk.capital = 100_000.0;
        risk.risk_pct = 1.0;
        let series = make_series(&[100.0; 30]);
        let analysis = analyze(&series, &risk, &settings).unwrap();

        // risk_amount 1000, per-share risk |100 - 95| = 5 → 200 shares.
        assert_eq!(analysis.quantity, 200);
        assert_relative_eq!(analysis.position_value, 20_000.0);
    }

    #[test]
    fn tiny_risk_budget_yields_zero_quantity() {
        let (mut risk, settings) = defaults();
        risk.capital = 100.0;
        risk.risk_pct = 1.0; // risk_amount = 1.0, per-share risk = 5.0
        let series = make_series(&[100.0; 30]);
        let analysis = analyze(&series, &risk, &settings).unwrap();

        assert_eq!(analysis.quantity, 0);
        assert_relative_eq!(analysis.position_value, 0.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let (risk, settings) = defaults();
        let closes: Vec<f64> = (0..45).map(|i| 100.0 + ((i * 13) % 7) as f64).collect();
        let series = make_series(&closes);

        let a = analyze(&series, &risk, &settings).unwrap();
        let b = analyze(&series, &risk, &settings).unwrap();

        assert_eq!(a.score, b.score);
        assert_eq!(a.entry.to_bits(), b.entry.to_bits());
        assert_eq!(a.target.to_bits(), b.target.to_bits());
        assert_eq!(a.expected_profit_pct.to_bits(), b.expected_profit_pct.to_bits());
        assert_eq!(a.reasons, b.reasons);
    }

    #[test]
    fn reasons_follow_rule_order() {
        let (risk, settings) = defaults();
        let closes: Vec<f64> = (0..60).map(|i| 101.0 + i as f64).collect();
        let analysis = analyze(&make_series(&closes), &risk, &settings).unwrap();

        assert_eq!(analysis.reasons.len(), 4);
        assert!(analysis.reasons[0].contains("50 SMA"));
        assert!(analysis.reasons[1].contains("RSI"));
        assert!(analysis.reasons[2].contains("MACD"));
        assert!(analysis.reasons[3].contains("Bollinger"));
    }

    #[test]
    fn confidence_proxy_tracks_score() {
        let (risk, settings) = defaults();
        let series = make_series(&[100.0; 30]);
        let analysis = analyze(&series, &risk, &settings).unwrap();
        assert_eq!(analysis.confidence_pct(), 50 + analysis.score * 10);
    }

    #[test]
    fn recommendation_display() {
        assert_eq!(Recommendation::Buy.to_string(), "BUY");
        assert_eq!(Recommendation::Sell.to_string(), "SELL");
        assert_eq!(Recommendation::Hold.to_string(), "HOLD");
    }
}
