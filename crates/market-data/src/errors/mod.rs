//! Error types for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: failures raised by a quote provider for a single fetch
//! - [`Unresolved`]: the resolver's "no usable price" outcome, which still carries
//!   a best-effort quote for the caller to render

use std::fmt;

use thiserror::Error;

use crate::models::ResolvedQuote;

/// Errors that can occur while fetching a quote from an upstream provider.
///
/// None of these cross the resolver boundary: the resolver degrades every
/// variant to a quote in the `ERROR` market state.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered but has no chart for the symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (non-success status, bad URL, etc.).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The payload could not be decoded or lacks the `meta` block.
    #[error("Malformed payload from {provider}: {message}")]
    MalformedPayload {
        /// The provider that sent the payload
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Why the resolver could not produce a usable price.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnresolvedReason {
    /// Spot was unusable and the instrument has no futures proxy.
    SpotUnusable,
    /// Spot was unusable and so was the futures proxy.
    FuturesUnusable,
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpotUnusable => write!(f, "spot unusable, no futures proxy"),
            Self::FuturesUnusable => write!(f, "spot and futures unusable"),
        }
    }
}

/// Resolution ended without a usable price.
///
/// `best_effort` is the primary (spot) result exactly as fetched, so the
/// HTTP boundary can still answer with a placeholder.
#[derive(Error, Debug, Clone)]
#[error("Unresolved {symbol}: {reason}")]
pub struct Unresolved {
    pub symbol: String,
    pub reason: UnresolvedReason,
    pub best_effort: ResolvedQuote,
}

impl Unresolved {
    /// Collapse into the best-effort quote.
    pub fn into_best_effort(self) -> ResolvedQuote {
        self.best_effort
    }
}
