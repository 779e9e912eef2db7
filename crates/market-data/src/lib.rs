//! Quotedeck Market Data Crate
//!
//! This crate resolves the current price of dashboard instruments (indices,
//! rates, FX, single tickers) from an upstream chart provider.
//!
//! # Overview
//!
//! The market data crate supports:
//! - A static table of index instruments with optional futures proxies
//! - Session-aware price selection (regular, pre-market, post-market)
//! - Futures fallback when the cash market is closed
//! - An "always answer" contract: failures degrade to a best-effort quote
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   HTTP handler   | --> |   Instrument     |  (static spot/futures pair)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  PriceResolver   |  (spot -> futures fallback)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  QuoteProvider   |  (Yahoo chart endpoint)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ResolvedQuote   |  (price, marketState, source)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Instrument`] - Logical instrument with spot and optional futures symbol
//! - [`SessionQuote`] - Session fields extracted from one upstream document
//! - [`ResolvedQuote`] - Best-effort price with market state and provenance
//! - [`MarketState`] - Trading session label
//! - [`PriceSource`] - Which field and instrument the price came from
//! - [`Unresolved`] - No usable price; carries the best-effort spot quote

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

// Re-export all public types from models
pub use models::{
    find_index_instrument, is_usable_price, Instrument, InstrumentKey, InstrumentKind,
    MarketState, PriceSource, ResolvedQuote, SessionQuote, Symbol,
    INDEX_INSTRUMENTS,
};

// Re-export error types
pub use errors::{MarketDataError, Unresolved, UnresolvedReason};

// Re-export provider types
pub use provider::yahoo::{YahooChartConfig, YahooProvider};
pub use provider::QuoteProvider;

// Re-export resolver types
pub use resolver::{MarketSnapshot, PriceResolver};
