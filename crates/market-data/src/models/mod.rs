//! Market data models
//!
//! This module contains the core data types for quote resolution:
//! - `types` - Type aliases for common identifiers (Symbol, InstrumentKey)
//! - `instrument` - Logical instruments and the static spot/futures table
//! - `market_state` - Trading session labels and price provenance tags
//! - `quote` - Upstream session quotes and resolved quotes

mod instrument;
mod market_state;
mod quote;
mod types;

pub use instrument::{find_index_instrument, Instrument, InstrumentKind, INDEX_INSTRUMENTS};
pub use market_state::{MarketState, PriceSource};
pub use quote::{is_usable_price, ResolvedQuote, SessionQuote};
pub use types::{InstrumentKey, Symbol};
