//! Price resolution for logical instruments.
//!
//! Turns an [`Instrument`](crate::models::Instrument) into a single best-effort
//! price plus a provenance tag, tolerating upstream failure.
//!
//! # Fallback chain
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PriceResolver                           │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 1. Spot                                                 │ │
//! │  │    - PRE + preMarketPrice   -> source "pre"             │ │
//! │  │    - POST + postMarketPrice -> source "post"            │ │
//! │  │    - otherwise regular price -> source "spot"           │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! │                           │ no price, or session not open    │
//! │                           ▼                                  │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │ 2. Futures proxy (only if the instrument has one)       │ │
//! │  │    - regular price -> source "futures"                  │ │
//! │  │    - market state stays the spot session label          │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! │                           │ absent or unusable               │
//! │                           ▼                                  │
//! │                 Unresolved { best_effort: spot }             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! At most two upstream requests are made per instrument. Nothing is cached
//! and nothing is retried.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quotedeck_market_data::{find_index_instrument, PriceResolver, YahooProvider};
//!
//! let resolver = PriceResolver::new(Arc::new(YahooProvider::new(Default::default())?));
//! let nasdaq = find_index_instrument("nasdaq").unwrap();
//!
//! // Never fails: unresolved instruments collapse to their spot result
//! let quote = resolver.resolve_or_default(nasdaq).await;
//! println!("{} {} ({})", quote.price_or_zero(), quote.source, quote.market_state);
//! ```

mod price_resolver;
mod snapshot;

pub use price_resolver::PriceResolver;
pub use snapshot::MarketSnapshot;
