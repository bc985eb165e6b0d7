//! Where quotes come from. The engine only ever sees the resolved price.

use crate::error::InputError;
use crate::types::Quote;
use crate::utils::sanitize_symbol;

pub trait QuoteSource {
    fn quote(&self, symbol: &str) -> Option<Quote>;

    fn require(&self, symbol: &str) -> Result<Quote, InputError> {
        self.quote(symbol)
            .ok_or_else(|| InputError::MissingQuote(sanitize_symbol(symbol)))
    }
}

/// Fixed quotes, e.g. from the run configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticQuotes {
    quotes: Vec<Quote>,
}

impl StaticQuotes {
    pub fn new(quotes: impl IntoIterator<Item = Quote>) -> Self {
        Self {
            quotes: quotes
                .into_iter()
                .map(|q| Quote {
                    symbol: sanitize_symbol(&q.symbol),
                    ..q
                })
                .collect(),
        }
    }
}

impl QuoteSource for StaticQuotes {
    fn quote(&self, symbol: &str) -> Option<Quote> {
        let sym = sanitize_symbol(symbol);
        self.quotes
            .iter()
            .find(|q| q.symbol == sym && q.current_price.is_finite())
            .cloned()
    }
}
