//! Quote provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::SessionQuote;

/// Trait for upstream quote sources.
///
/// Implementations perform exactly one upstream request per call and never
/// retry; the resolver owns the fallback policy.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use quotedeck_market_data::provider::QuoteProvider;
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl QuoteProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_session_quote(&self, symbol: &str) -> Result<SessionQuote, MarketDataError> {
///         Ok(SessionQuote::regular(symbol, Some(dec!(100)), MarketState::Regular))
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    ///
    /// Used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the current session data for a symbol.
    ///
    /// # Returns
    ///
    /// The extracted session quote. Null price fields are returned as `None`
    /// rather than as an error; a missing or undecodable payload is an error.
    async fn fetch_session_quote(&self, symbol: &str) -> Result<SessionQuote, MarketDataError>;
}
