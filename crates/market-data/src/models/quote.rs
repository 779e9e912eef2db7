use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::market_state::{MarketState, PriceSource};

/// Session data for one symbol, as extracted from the provider's payload.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionQuote {
    pub symbol: String,
    pub regular_price: Option<Decimal>,
    pub pre_market_price: Option<Decimal>,
    pub post_market_price: Option<Decimal>,
    pub market_state: MarketState,
    pub currency: Option<String>,
    pub as_of: Option<DateTime<Utc>>,
}

impl SessionQuote {
    /// Create a quote carrying only a regular-session price.
    pub fn regular(symbol: impl Into<String>, price: Option<Decimal>, state: MarketState) -> Self {
        Self {
            symbol: symbol.into(),
            regular_price: price,
            pre_market_price: None,
            post_market_price: None,
            market_state: state,
            currency: None,
            as_of: None,
        }
    }

    pub fn with_pre_market(mut self, price: Option<Decimal>) -> Self {
        self.pre_market_price = price;
        self
    }

    pub fn with_post_market(mut self, price: Option<Decimal>) -> Self {
        self.post_market_price = price;
        self
    }

    /// Pick the session-appropriate price.
    ///
    /// Extended-hours fields win only while their own session is open;
    /// everything else reads the regular price.
    pub fn session_price(&self) -> (Option<Decimal>, PriceSource) {
        match (self.market_state, self.pre_market_price, self.post_market_price) {
            (MarketState::Pre, Some(pre), _) => (Some(pre), PriceSource::Pre),
            (MarketState::Post, _, Some(post)) => (Some(post), PriceSource::Post),
            _ => (self.regular_price, PriceSource::Spot),
        }
    }

    /// Resolve as a spot instrument, honoring extended-hours fields.
    pub fn into_resolved(self) -> ResolvedQuote {
        let (price, source) = self.session_price();
        ResolvedQuote {
            symbol: self.symbol,
            price,
            market_state: self.market_state,
            source,
            currency: self.currency,
            as_of: self.as_of,
        }
    }

    /// Resolve as a futures proxy: regular price only.
    pub fn into_regular_resolved(self) -> ResolvedQuote {
        ResolvedQuote {
            symbol: self.symbol,
            price: self.regular_price,
            market_state: self.market_state,
            source: PriceSource::Spot,
            currency: self.currency,
            as_of: self.as_of,
        }
    }
}

/// Best-effort price for one instrument together with its provenance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedQuote {
    /// Symbol the price was read from (the futures symbol after a fallback)
    pub symbol: String,

    /// Resolved price; `None` when every attempt failed
    pub price: Option<Decimal>,

    pub market_state: MarketState,

    pub source: PriceSource,

    /// Quote currency reported upstream (`USD`, `KRW`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Upstream timestamp of the regular-market price, when provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
}

impl ResolvedQuote {
    /// The quote reported when a fetch failed outright.
    pub fn failed(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: None,
            market_state: MarketState::Error,
            source: PriceSource::Spot,
            currency: None,
            as_of: None,
        }
    }

    /// Usable iff the price is present and non-zero and the session is open.
    pub fn is_usable(&self) -> bool {
        is_usable_price(self.price) && self.market_state.is_trading()
    }

    /// Price for display surfaces that cannot express "no price".
    pub fn price_or_zero(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }
}

/// A price is usable when present and non-zero.
pub fn is_usable_price(price: Option<Decimal>) -> bool {
    price.is_some_and(|p| !p.is_zero())
}
