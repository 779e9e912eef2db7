//! Spot → extended hours → futures price resolution.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info, warn};

use crate::errors::{Unresolved, UnresolvedReason};
use crate::models::{is_usable_price, Instrument, PriceSource, ResolvedQuote, SessionQuote};
use crate::provider::QuoteProvider;

use super::snapshot::MarketSnapshot;

/// Resolves instruments to a best-effort price through a quote provider.
///
/// Stateless apart from the provider handle; one resolver is shared by all
/// request handlers.
#[derive(Clone)]
pub struct PriceResolver {
    provider: Arc<dyn QuoteProvider>,
}

impl PriceResolver {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// Fetch one symbol and pick its session-appropriate price.
    ///
    /// Fetch failures of any kind come back as an `ERROR` quote with no price.
    pub async fn fetch_session(&self, symbol: &str) -> ResolvedQuote {
        match self.fetch(symbol).await {
            Some(session) => session.into_resolved(),
            None => ResolvedQuote::failed(symbol),
        }
    }

    /// Resolve an instrument, falling back to its futures proxy when the spot
    /// price is unusable.
    ///
    /// On fallback the reported market state is the spot session label, not
    /// the futures session, so callers can tell "closed cash market shown via
    /// futures" from an open market.
    pub async fn resolve(&self, instrument: &Instrument) -> Result<ResolvedQuote, Unresolved> {
        let primary = self.fetch_session(&instrument.spot).await;
        if primary.is_usable() {
            return Ok(primary);
        }

        let Some(futures_symbol) = instrument.futures.as_deref() else {
            debug!(
                "{} unusable ({}), no futures proxy for {}",
                instrument.spot, primary.market_state, instrument.key
            );
            return Err(Unresolved {
                symbol: instrument.spot.to_string(),
                reason: UnresolvedReason::SpotUnusable,
                best_effort: primary,
            });
        };

        let proxy = match self.fetch(futures_symbol).await {
            Some(session) => session.into_regular_resolved(),
            None => ResolvedQuote::failed(futures_symbol),
        };

        if is_usable_price(proxy.price) {
            info!(
                "{} resolved via futures {} while spot is {}",
                instrument.key, futures_symbol, primary.market_state
            );
            return Ok(ResolvedQuote {
                symbol: proxy.symbol,
                price: proxy.price,
                market_state: primary.market_state,
                source: PriceSource::Futures,
                currency: proxy.currency,
                as_of: proxy.as_of,
            });
        }

        debug!(
            "{} unusable and futures {} unusable for {}",
            instrument.spot, futures_symbol, instrument.key
        );
        Err(Unresolved {
            symbol: instrument.spot.to_string(),
            reason: UnresolvedReason::FuturesUnusable,
            best_effort: primary,
        })
    }

    /// Resolve and collapse any [`Unresolved`] outcome into its best-effort
    /// spot quote.
    pub async fn resolve_or_default(&self, instrument: &Instrument) -> ResolvedQuote {
        self.resolve(instrument)
            .await
            .unwrap_or_else(Unresolved::into_best_effort)
    }

    /// Resolve every instrument concurrently.
    ///
    /// Resolutions are independent: a failing instrument neither cancels nor
    /// delays the result of its siblings beyond its own fetches.
    pub async fn resolve_all(&self, instruments: &[Instrument]) -> MarketSnapshot {
        let resolutions = instruments.iter().map(|instrument| async move {
            let quote = self.resolve_or_default(instrument).await;
            (instrument.key.clone(), quote)
        });
        let snapshot = MarketSnapshot::new(join_all(resolutions).await);

        debug!(
            "Resolved {}/{} instruments via {}",
            snapshot.resolved_count(),
            snapshot.len(),
            self.provider_id()
        );
        snapshot
    }

    async fn fetch(&self, symbol: &str) -> Option<SessionQuote> {
        match self.provider.fetch_session_quote(symbol).await {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("{} fetch failed for {}: {}", self.provider.id(), symbol, e);
                None
            }
        }
    }
}
