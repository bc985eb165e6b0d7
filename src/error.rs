//! Caller-side input errors. The engine itself never fails; these are raised
//! while assembling its inputs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("no quote available for {0}")]
    MissingQuote(String),
    #[error("quote is for {quote} but the ticket is for {ticket}")]
    SymbolMismatch { quote: String, ticket: String },
    #[error("purchase price is required when the shares are already owned")]
    MissingPurchasePrice,
    #[error("unrecognized ticket: {0}")]
    BadTicket(String),
    #[error("ticket is a {ticket} but the {strategy} strategy was selected")]
    WrongSide { ticket: char, strategy: &'static str },
    #[error("no {0} section configured")]
    MissingSection(&'static str),
}
