//! Day counting and annualization.

use chrono::{Duration, NaiveDate};

/// Days a freshly opened position stays on when no expiration is picked.
pub const DEFAULT_EXPIRATION_DAYS: i64 = 7;

/// Whole calendar days from `today` to `expiration`, floored at zero.
/// Past or missing expirations count as zero days.
pub fn days_to_expiration(today: NaiveDate, expiration: Option<NaiveDate>) -> u32 {
    let Some(exp) = expiration else { return 0 };
    let diff = (exp - today).num_days();
    u32::try_from(diff.max(0)).unwrap_or(u32::MAX)
}

/// Linear (simple-interest) rescale of a period return to 365 days.
/// Not compounded.
pub fn annualize(period_return: f64, days: u32) -> f64 {
    if days == 0 {
        return 0.0;
    }
    period_return * (365.0 / f64::from(days))
}

pub fn default_expiration(today: NaiveDate) -> NaiveDate {
    today + Duration::days(DEFAULT_EXPIRATION_DAYS)
}
