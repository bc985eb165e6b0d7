//! Parse short-option trade tickets.
//! Supported: "STO [qty] SYMBOL STRIKE(P|C) YYYY-MM-DD @ PREMIUM" (SELL works for STO).

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::types::{CallInputs, OptionKind, PutInputs, SHARES_PER_CONTRACT};
use crate::utils::sanitize_symbol;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub symbol: String,
    pub kind: OptionKind,
    pub strike: f64,
    pub expiration: NaiveDate,
    pub premium: f64,
    /// Contracts.
    pub quantity: u32,
}

impl Ticket {
    pub fn put_inputs(&self, stock_price: f64) -> PutInputs {
        PutInputs {
            stock_price,
            strike_price: self.strike,
            premium: self.premium,
            expiration_date: self.expiration,
        }
    }

    /// Shares are the ticket's contracts times 100.
    pub fn call_inputs(&self, stock_price: f64, owns_shares: bool, purchase_price: Option<f64>) -> CallInputs {
        CallInputs {
            stock_price,
            shares: self.quantity.saturating_mul(SHARES_PER_CONTRACT),
            strike: self.strike,
            premium: self.premium,
            expiration_date: Some(self.expiration),
            owns_shares,
            purchase_price: if owns_shares { purchase_price } else { None },
        }
    }
}

fn ticket_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(STO|SELL)\s+(?:(\d+)\s+)?([A-Z]{1,6})\s+(\d+(?:\.\d+)?)\s*([CP])\s+(\d{4}-\d{2}-\d{2})\s*@\s*(\d+(?:\.\d+)?)$",
        )
        .expect("ticket pattern is valid")
    })
}

pub fn parse_ticket(text: &str) -> Option<Ticket> {
    let t = text.trim();
    let c = ticket_re().captures(t)?;

    let quantity: u32 = match c.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1, // default when qty missing
    };
    if quantity == 0 {
        return None;
    }
    let symbol = sanitize_symbol(&c[3]);
    let strike: f64 = c[4].parse().ok()?;
    let kind = OptionKind::from_char(c[5].chars().next()?)?;
    let expiration = NaiveDate::parse_from_str(&c[6], "%Y-%m-%d").ok()?;
    let premium: f64 = c[7].parse().ok()?;

    Some(Ticket {
        symbol,
        kind,
        strike,
        expiration,
        premium,
        quantity,
    })
}
