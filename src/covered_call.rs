//! Covered-call engine. Gains are measured from the trader's real cost
//! basis when the shares are already owned, otherwise from the quote.

use chrono::NaiveDate;
use tracing::debug;

use crate::dates::days_to_expiration;
use crate::types::{CallInputs, CallResults, SHARES_PER_CONTRACT};
use crate::utils::safe_div;

/// Entry price used for every gain figure.
pub fn cost_basis(inputs: &CallInputs) -> f64 {
    match inputs.purchase_price {
        Some(p) if inputs.owns_shares && present(p) => p,
        _ => inputs.stock_price,
    }
}

/// A price counts as given only when it is finite and non-zero.
fn present(v: f64) -> bool {
    v.is_finite() && v != 0.0
}

/// Returns `None` until the quote, shares, strike, premium and expiration
/// are all present and non-zero.
pub fn compute_covered_call(inputs: &CallInputs, today: NaiveDate) -> Option<CallResults> {
    let Some(expiration) = inputs.expiration_date else {
        debug!("covered call: no expiration yet");
        return None;
    };
    if !present(inputs.stock_price) || inputs.shares == 0 || !present(inputs.strike) || !present(inputs.premium) {
        debug!("covered call: required input missing");
        return None;
    }

    let contracts = inputs.shares / SHARES_PER_CONTRACT;
    let shares = f64::from(inputs.shares);
    let days = days_to_expiration(today, Some(expiration));
    let basis = cost_basis(inputs);

    let capital_used = shares * basis;
    let premium_collected = f64::from(contracts * SHARES_PER_CONTRACT) * inputs.premium;
    let premium_pct_return = safe_div(premium_collected, capital_used) * 100.0;
    let (premium_per_day, annualized_return) = if days > 0 {
        let d = f64::from(days);
        (safe_div(premium_collected, d), premium_pct_return * (365.0 / d))
    } else {
        (0.0, 0.0)
    };

    // Same figure as `stock_gains_pct`, reported separately.
    let pct_rise_share = safe_div(inputs.strike - basis, basis) * 100.0;
    let stock_gains_if_exercised = (inputs.strike - basis) * shares;
    let stock_gains_pct = safe_div(inputs.strike - basis, basis) * 100.0;
    let total_gain = stock_gains_if_exercised + premium_collected;

    let results = CallResults {
        breakeven: basis - inputs.premium,
        options_contracts: contracts,
        pct_rise_share,
        premium_collected,
        days,
        premium_pct_return,
        premium_per_day,
        capital_used,
        annualized_return,
        stock_gains_if_exercised,
        stock_gains_pct,
        total_gain,
        total_pct_gain: safe_div(total_gain, capital_used) * 100.0,
    };
    debug!(contracts, days, basis, "covered call metrics computed");
    Some(results)
}
