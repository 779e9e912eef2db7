use crate::models::{InstrumentKey, MarketState, ResolvedQuote};

/// Resolved quotes for a group of instruments, in request order.
#[derive(Clone, Debug, Default)]
pub struct MarketSnapshot {
    quotes: Vec<(InstrumentKey, ResolvedQuote)>,
}

impl MarketSnapshot {
    pub fn new(quotes: Vec<(InstrumentKey, ResolvedQuote)>) -> Self {
        Self { quotes }
    }

    /// Overall session label: the one reported for the first instrument.
    pub fn market_state(&self) -> MarketState {
        self.quotes
            .first()
            .map(|(_, quote)| quote.market_state)
            .unwrap_or(MarketState::Error)
    }

    pub fn get(&self, key: &str) -> Option<&ResolvedQuote> {
        self.quotes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, quote)| quote)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedQuote)> {
        self.quotes.iter().map(|(k, quote)| (k.as_ref(), quote))
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Number of instruments that ended up with a usable price.
    pub fn resolved_count(&self) -> usize {
        self.quotes
            .iter()
            .filter(|(_, quote)| crate::models::is_usable_price(quote.price))
            .count()
    }
}
