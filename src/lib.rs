//! Income-strategy calculator for cash-secured puts and covered calls.
//!
//! The engine (`dates`, `put`, `covered_call`, `targets`) is pure: callers
//! hand it resolved quotes, numbers and dates, and an explicit "today".

pub mod chain;
pub mod config;
pub mod covered_call;
pub mod dates;
pub mod error;
pub mod market;
pub mod parser;
pub mod put;
pub mod quote;
pub mod report;
pub mod targets;
pub mod types;
pub mod utils;

pub use covered_call::compute_covered_call;
pub use dates::{annualize, days_to_expiration};
pub use put::{compute_put, compute_short_option};
pub use targets::{is_met, Direction};
