//! Regular-session status for US equities, from an Eastern wall-clock time.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Utc, Weekday};
use chrono_tz::America::New_York;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarketStatus {
    Open,
    Closed,
    ClosedWeekend,
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketStatus::Open => write!(f, "open"),
            MarketStatus::Closed => write!(f, "closed"),
            MarketStatus::ClosedWeekend => write!(f, "closed (weekend)"),
        }
    }
}

/// `eastern` must already be in America/New_York local time.
/// Holidays are not modelled.
pub fn market_status(eastern: NaiveDateTime) -> MarketStatus {
    if matches!(eastern.weekday(), Weekday::Sat | Weekday::Sun) {
        return MarketStatus::ClosedWeekend;
    }
    let open = NaiveTime::from_hms_opt(9, 30, 0).unwrap_or(NaiveTime::MIN);
    let close = NaiveTime::from_hms_opt(16, 0, 0).unwrap_or(NaiveTime::MIN);
    let t = eastern.time();
    if open <= t && t <= close {
        MarketStatus::Open
    } else {
        MarketStatus::Closed
    }
}

pub fn current_market_status() -> MarketStatus {
    market_status(Utc::now().with_timezone(&New_York).naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn weekday_session_bounds_inclusive() {
        // 2026-10-19 is a Monday.
        assert_eq!(market_status(at("2026-10-19 09:29:59")), MarketStatus::Closed);
        assert_eq!(market_status(at("2026-10-19 09:30:00")), MarketStatus::Open);
        assert_eq!(market_status(at("2026-10-19 16:00:00")), MarketStatus::Open);
        assert_eq!(market_status(at("2026-10-19 16:00:01")), MarketStatus::Closed);
    }

    #[test]
    fn weekends_are_closed() {
        assert_eq!(market_status(at("2026-10-17 12:00:00")), MarketStatus::ClosedWeekend);
        assert_eq!(market_status(at("2026-10-18 12:00:00")), MarketStatus::ClosedWeekend);
        assert_eq!(MarketStatus::ClosedWeekend.to_string(), "closed (weekend)");
    }
}
