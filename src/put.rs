//! Cash-secured put engine, plus its short-call mirror.

use chrono::NaiveDate;
use tracing::debug;

use crate::dates::{annualize, days_to_expiration};
use crate::types::{OptionKind, PutInputs, PutResults, SHARES_PER_CONTRACT};
use crate::utils::safe_div;

pub fn compute_put(inputs: &PutInputs, today: NaiveDate) -> PutResults {
    compute_short_option(OptionKind::Put, inputs, today)
}

/// Metrics for selling one contract. Puts are secured by the strike,
/// calls by the stock; the call path flips breakeven and the distance
/// to the strike.
pub fn compute_short_option(kind: OptionKind, inputs: &PutInputs, today: NaiveDate) -> PutResults {
    let shares = f64::from(SHARES_PER_CONTRACT);
    let PutInputs {
        stock_price,
        strike_price,
        premium,
        expiration_date,
    } = *inputs;
    let days = days_to_expiration(today, Some(expiration_date));

    let (breakeven, capital_required, return_fraction, drop_from_current) = match kind {
        OptionKind::Put => (
            strike_price - premium,
            strike_price * shares,
            safe_div(premium, strike_price),
            safe_div(stock_price - strike_price, stock_price) * 100.0,
        ),
        OptionKind::Call => (
            strike_price + premium,
            stock_price * shares,
            safe_div(premium, stock_price),
            safe_div(strike_price - stock_price, stock_price) * 100.0,
        ),
    };

    let premium_collected = premium * shares;
    let premium_per_day = if days > 0 {
        safe_div(premium_collected, f64::from(days))
    } else {
        0.0
    };

    let results = PutResults {
        breakeven,
        capital_required,
        percent_return: return_fraction * 100.0,
        premium_collected,
        premium_per_day,
        drop_from_current,
        days,
        annualized_return: annualize(return_fraction, days) * 100.0,
    };
    debug!(?kind, days, "short option metrics computed");
    results
}
