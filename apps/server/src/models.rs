use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use quotedeck_market_data::{MarketSnapshot, MarketState, PriceSource, ResolvedQuote};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Market overview: one flat price per instrument key next to the shared
/// fields, e.g. `{"nasdaq": 15050.0, ..., "marketState": "PRE", "sources": {...}}`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    #[serde(flatten)]
    pub prices: BTreeMap<String, Decimal>,
    pub market_state: MarketState,
    pub sources: BTreeMap<String, PriceSource>,
    /// Unix milliseconds
    pub timestamp: i64,
}

impl MarketOverview {
    pub fn from_snapshot(snapshot: &MarketSnapshot, timestamp: i64) -> Self {
        let prices = snapshot
            .iter()
            .map(|(key, quote)| (key.to_string(), quote.price_or_zero()))
            .collect();
        let sources = snapshot
            .iter()
            .map(|(key, quote)| (key.to_string(), quote.source))
            .collect();
        Self {
            prices,
            market_state: snapshot.market_state(),
            sources,
            timestamp,
        }
    }
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    /// Single ticker, e.g. `AAPL`
    pub symbol: Option<String>,
    /// Comma separated tickers, e.g. `AAPL,MSFT`
    pub symbols: Option<String>,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TickerPrice {
    pub symbol: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[schema(value_type = String, example = "REGULAR")]
    pub market_state: MarketState,
    #[schema(value_type = String, example = "spot")]
    pub source: PriceSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
    /// Unix milliseconds
    pub timestamp: i64,
}

impl TickerPrice {
    pub fn from_quote(symbol: &str, quote: &ResolvedQuote, timestamp: i64) -> Self {
        Self {
            symbol: symbol.to_string(),
            price: quote.price_or_zero(),
            market_state: quote.market_state,
            source: quote.source,
            currency: quote.currency.clone(),
            as_of: quote.as_of,
            timestamp,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct TickerPrices {
    pub quotes: BTreeMap<String, TickerPrice>,
    /// Unix milliseconds
    pub timestamp: i64,
}

/// `?symbol=` answers with a single price, `?symbols=` with a map.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum PriceResponse {
    Single(TickerPrice),
    Many(TickerPrices),
}
