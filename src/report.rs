//! Display rows for a results record, each flagged against the trader's targets.

use serde::Serialize;
use std::fmt;

use crate::targets::{CallMetric, PutMetric, TargetKey, TargetSet};
use crate::types::{CallResults, PutResults};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricEvaluation {
    pub label: &'static str,
    pub display_value: String,
    pub is_met: bool,
}

impl fmt::Display for MetricEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_met { '*' } else { ' ' };
        write!(f, "{} {:<36}{:>14}", mark, self.label, self.display_value)
    }
}

pub fn percent(v: f64) -> String {
    format!("{:.2}%", v)
}

pub fn money(v: f64) -> String {
    format!("${:.2}", v)
}

/// Dollar amount with thousands separators and at most three fraction
/// digits, trailing zeros dropped (`9500` -> `$9,500`, `1234.5` -> `$1,234.5`).
pub fn capital(v: f64) -> String {
    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if v < 0.0 && (int_part != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac}")
    }
}

fn row(label: &'static str, display_value: String) -> MetricEvaluation {
    MetricEvaluation {
        label,
        display_value,
        is_met: false,
    }
}

fn targeted<K: TargetKey>(
    label: &'static str,
    display_value: String,
    key: K,
    results: &K::Results,
    targets: &TargetSet<K>,
) -> MetricEvaluation {
    MetricEvaluation {
        label,
        display_value,
        is_met: targets.is_met(key, results),
    }
}

pub fn put_report(r: &PutResults, targets: &TargetSet<PutMetric>) -> Vec<MetricEvaluation> {
    vec![
        targeted(
            "% Drop from Current Price",
            percent(r.drop_from_current),
            PutMetric::DropFromCurrent,
            r,
            targets,
        ),
        row("Breakeven Price", money(r.breakeven)),
        row("Premium collected ($)", money(r.premium_collected)),
        row("Days to Expiration", r.days.to_string()),
        targeted(
            "% Return on Capital",
            percent(r.percent_return),
            PutMetric::PercentReturn,
            r,
            targets,
        ),
        targeted(
            "Premium per day ($)",
            money(r.premium_per_day),
            PutMetric::PremiumPerDay,
            r,
            targets,
        ),
        row("$ needed to Buy Stock", capital(r.capital_required)),
        targeted(
            "Premium Annualized",
            percent(r.annualized_return),
            PutMetric::Annualized,
            r,
            targets,
        ),
    ]
}

pub fn covered_call_report(r: &CallResults, targets: &TargetSet<CallMetric>) -> Vec<MetricEvaluation> {
    vec![
        row("Breakeven Price", money(r.breakeven)),
        row("# Options to trade", r.options_contracts.to_string()),
        row("% Rise in Share Value", percent(r.pct_rise_share)),
        row("Premium collected ($)", money(r.premium_collected)),
        row("Days to Expiration", r.days.to_string()),
        targeted(
            "Premium % Return @ Expiration",
            percent(r.premium_pct_return),
            CallMetric::PremiumPctReturn,
            r,
            targets,
        ),
        targeted(
            "Premium per day ($)",
            money(r.premium_per_day),
            CallMetric::PremiumPerDay,
            r,
            targets,
        ),
        row("Capital used", capital(r.capital_used)),
        targeted(
            "Premium annualized",
            percent(r.annualized_return),
            CallMetric::Annualized,
            r,
            targets,
        ),
        row("Stock Gains if Exercised ($)", money(r.stock_gains_if_exercised)),
        row("Stock Gains for Holding Period (%)", percent(r.stock_gains_pct)),
        targeted(
            "Total %Gain (Option & Stock)",
            percent(r.total_pct_gain),
            CallMetric::TotalPctGain,
            r,
            targets,
        ),
        targeted(
            "Total Gain (Option & Stock)",
            money(r.total_gain),
            CallMetric::TotalGain,
            r,
            targets,
        ),
    ]
}
