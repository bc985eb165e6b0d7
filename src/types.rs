//! Core value records: quotes, strategy inputs and derived results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shares controlled by one option contract.
pub const SHARES_PER_CONTRACT: u32 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Self::Call),
            'P' => Some(Self::Put),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }
}

/// Point-in-time price for a ticker, resolved by whoever calls the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub current_price: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PutInputs {
    /// Live quote, never user-edited.
    pub stock_price: f64,
    pub strike_price: f64,
    pub premium: f64,
    pub expiration_date: NaiveDate,
}

impl PutInputs {
    /// Builds the record only once every field is known.
    pub fn ready(
        stock_price: Option<f64>,
        strike_price: Option<f64>,
        premium: Option<f64>,
        expiration_date: Option<NaiveDate>,
    ) -> Option<Self> {
        Some(Self {
            stock_price: stock_price?,
            strike_price: strike_price?,
            premium: premium?,
            expiration_date: expiration_date?,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PutResults {
    pub breakeven: f64,
    pub capital_required: f64,
    /// Percent, e.g. `1.32` for 1.32%.
    pub percent_return: f64,
    pub premium_collected: f64,
    pub premium_per_day: f64,
    pub drop_from_current: f64,
    pub days: u32,
    pub annualized_return: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CallInputs {
    pub stock_price: f64,
    pub shares: u32,
    pub strike: f64,
    pub premium: f64,
    pub expiration_date: Option<NaiveDate>,
    pub owns_shares: bool,
    /// Only meaningful when `owns_shares` is set.
    pub purchase_price: Option<f64>,
}

impl CallInputs {
    /// Builds the record when the required fields are present. A purchase
    /// price is required only for shares already owned.
    pub fn ready(
        stock_price: Option<f64>,
        shares: Option<u32>,
        strike: Option<f64>,
        premium: Option<f64>,
        expiration_date: Option<NaiveDate>,
        owns_shares: bool,
        purchase_price: Option<f64>,
    ) -> Option<Self> {
        if owns_shares && purchase_price.is_none() {
            return None;
        }
        Some(Self {
            stock_price: stock_price?,
            shares: shares?,
            strike: strike?,
            premium: premium?,
            expiration_date: Some(expiration_date?),
            owns_shares,
            purchase_price: if owns_shares { purchase_price } else { None },
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CallResults {
    pub breakeven: f64,
    pub options_contracts: u32,
    pub pct_rise_share: f64,
    pub premium_collected: f64,
    pub days: u32,
    pub premium_pct_return: f64,
    pub premium_per_day: f64,
    pub capital_used: f64,
    pub annualized_return: f64,
    pub stock_gains_if_exercised: f64,
    pub stock_gains_pct: f64,
    pub total_gain: f64,
    pub total_pct_gain: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn option_kind_from_char_is_case_insensitive() {
        assert_eq!(OptionKind::from_char('p'), Some(OptionKind::Put));
        assert_eq!(OptionKind::from_char('C'), Some(OptionKind::Call));
        assert_eq!(OptionKind::from_char('x'), None);
        assert_eq!(OptionKind::Put.as_char(), 'P');
    }

    #[test]
    fn put_inputs_need_every_field() {
        let exp = date("2026-10-25");
        assert!(PutInputs::ready(Some(99.0), Some(95.0), Some(1.25), Some(exp)).is_some());
        assert!(PutInputs::ready(None, Some(95.0), Some(1.25), Some(exp)).is_none());
        assert!(PutInputs::ready(Some(99.0), Some(95.0), None, Some(exp)).is_none());
        assert!(PutInputs::ready(Some(99.0), Some(95.0), Some(1.25), None).is_none());
    }

    #[test]
    fn call_inputs_require_purchase_price_only_when_owned() {
        let exp = Some(date("2026-11-01"));
        let not_owned = CallInputs::ready(Some(100.0), Some(100), Some(105.0), Some(2.0), exp, false, Some(90.0))
            .expect("ready");
        // A stray purchase price is dropped when the shares are not owned.
        assert_eq!(not_owned.purchase_price, None);

        assert!(CallInputs::ready(Some(100.0), Some(100), Some(105.0), Some(2.0), exp, true, None).is_none());
        let owned = CallInputs::ready(Some(100.0), Some(100), Some(105.0), Some(2.0), exp, true, Some(90.0))
            .expect("ready");
        assert_eq!(owned.purchase_price, Some(90.0));
    }
}
