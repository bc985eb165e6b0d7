//! Option-chain helpers: pick the at-the-money strike, the strikes around it
//! and the nearest expirations, for seeding a strategy's inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::OptionKind;

/// Strikes kept around the at-the-money strike.
pub const MAX_STRIKES: usize = 21;
/// Upcoming expirations reported.
pub const MAX_EXPIRATIONS: usize = 8;
/// Band half-width is `BAND_STEPS * |atm * BAND_STEP_PCT|`.
const BAND_STEPS: f64 = 10.0;
const BAND_STEP_PCT: f64 = 0.05;

/// One listed contract, as broker contract listings report it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionContract {
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    #[serde(deserialize_with = "number_or_string")]
    pub strike_price: f64,
    pub expiration_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChainSummary {
    pub at_the_money_strike: f64,
    pub closest_strike_prices: Vec<f64>,
    pub next_expiration_dates: Vec<NaiveDate>,
}

fn number_or_string<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }
    match Raw::deserialize(d)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Whole-dollar strike just below the quote, used before the trader picks one.
pub fn default_strike(current_price: f64) -> f64 {
    current_price.floor()
}

/// Summarizes the `kind` side of a chain. `None` when that side is empty.
pub fn summarize(
    contracts: &[OptionContract],
    kind: OptionKind,
    current_price: f64,
    today: NaiveDate,
) -> Option<ChainSummary> {
    let side: Vec<&OptionContract> = contracts.iter().filter(|c| c.kind == kind).collect();
    let distance = |strike: f64| (strike - current_price).abs();

    let atm = side
        .iter()
        .min_by(|a, b| distance(a.strike_price).total_cmp(&distance(b.strike_price)))?
        .strike_price;

    let half_width = BAND_STEPS * (atm * BAND_STEP_PCT).abs();
    let (lower, upper) = (atm - half_width, atm + half_width);

    let mut near: Vec<&OptionContract> = side
        .iter()
        .copied()
        .filter(|c| lower <= c.strike_price && c.strike_price <= upper)
        .collect();
    near.sort_by(|a, b| distance(a.strike_price).total_cmp(&distance(b.strike_price)));
    near.truncate(MAX_STRIKES);

    let mut strikes: Vec<f64> = near.iter().map(|c| c.strike_price).collect();
    strikes.sort_by(f64::total_cmp);
    strikes.dedup();

    let mut expirations: Vec<NaiveDate> = side.iter().map(|c| c.expiration_date).collect();
    expirations.sort();
    expirations.dedup();
    let upcoming: Vec<NaiveDate> = expirations
        .into_iter()
        .filter(|d| *d >= today)
        .take(MAX_EXPIRATIONS)
        .collect();

    Some(ChainSummary {
        at_the_money_strike: atm,
        closest_strike_prices: strikes,
        next_expiration_dates: upcoming,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn put(strike: f64, exp: &str) -> OptionContract {
        OptionContract {
            symbol: format!("SPY{}P{}", exp.replace('-', ""), strike),
            kind: OptionKind::Put,
            strike_price: strike,
            expiration_date: date(exp),
        }
    }

    #[test]
    fn parses_broker_listing_with_string_strikes() {
        let raw = r#"[
            {"symbol":"SPY261025P00095000","type":"put","strike_price":"95","expiration_date":"2026-10-25"},
            {"symbol":"SPY261025C00100000","type":"call","strike_price":100.5,"expiration_date":"2026-10-25"}
        ]"#;
        let chain: Vec<OptionContract> = serde_json::from_str(raw).unwrap();
        assert_eq!(chain[0].kind, OptionKind::Put);
        assert_eq!(chain[0].strike_price, 95.0);
        assert_eq!(chain[1].kind, OptionKind::Call);
        assert_eq!(chain[1].strike_price, 100.5);
    }

    #[test]
    fn picks_atm_and_band() {
        let mut chain: Vec<OptionContract> = (80..=120).map(|s| put(f64::from(s), "2026-10-25")).collect();
        chain.push(put(10.0, "2026-10-25"));
        chain.push(put(400.0, "2026-10-25"));
        let s = summarize(&chain, OptionKind::Put, 99.4, date("2026-10-18")).unwrap();
        assert_eq!(s.at_the_money_strike, 99.0);
        assert_eq!(s.closest_strike_prices.len(), MAX_STRIKES);
        assert_eq!(s.closest_strike_prices.first(), Some(&89.0));
        assert_eq!(s.closest_strike_prices.last(), Some(&109.0));
        assert!(!s.closest_strike_prices.contains(&10.0));
    }

    #[test]
    fn upcoming_expirations_skip_past_and_cap() {
        let today = date("2026-10-18");
        let mut chain = vec![put(100.0, "2026-10-01"), put(100.0, "2026-10-18")];
        for week in 1..=10 {
            let exp = today + chrono::Duration::weeks(week);
            chain.push(put(100.0, &exp.to_string()));
            chain.push(put(101.0, &exp.to_string()));
        }
        let s = summarize(&chain, OptionKind::Put, 100.0, today).unwrap();
        assert_eq!(s.next_expiration_dates.len(), MAX_EXPIRATIONS);
        assert_eq!(s.next_expiration_dates[0], today);
        assert_eq!(s.closest_strike_prices, vec![100.0, 101.0]);
    }

    #[test]
    fn empty_side_has_no_summary() {
        let chain = vec![put(100.0, "2026-10-25")];
        assert!(summarize(&chain, OptionKind::Call, 100.0, date("2026-10-18")).is_none());
        assert!(summarize(&[], OptionKind::Put, 100.0, date("2026-10-18")).is_none());
    }

    #[test]
    fn default_strike_floors_the_quote() {
        assert_eq!(default_strike(99.87), 99.0);
        assert_eq!(default_strike(100.0), 100.0);
    }
}
