//! Yahoo Finance chart provider.
//!
//! Fetches the short-interval chart document for a symbol and extracts the
//! session metadata used for price resolution:
//! - Indices (e.g., ^IXIC, ^GSPC)
//! - Index futures (e.g., NQ=F)
//! - Rates and FX (e.g., ^TNX, KRW=X)

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::{header, StatusCode};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{MarketState, SessionQuote};
use crate::provider::QuoteProvider;

use models::{YahooChartEnvelope, YahooChartMeta};

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

// ============================================================================
// Configuration
// ============================================================================

/// Settings for the chart endpoint.
#[derive(Clone, Debug)]
pub struct YahooChartConfig {
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    /// Bar interval requested from the chart endpoint
    pub interval: String,
    /// Lookback range requested from the chart endpoint
    pub range: String,
    /// Per-request deadline
    pub timeout: Duration,
}

impl Default for YahooChartConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            interval: "1m".to_string(),
            range: "1d".to_string(),
            timeout: Duration::from_secs(8),
        }
    }
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance chart provider.
///
/// Holds a pooled HTTP client; cloning the provider is not needed since it is
/// shared behind an `Arc` by the resolver.
pub struct YahooProvider {
    client: reqwest::Client,
    config: YahooChartConfig,
}

impl YahooProvider {
    /// Create a new provider with the given endpoint settings.
    pub fn new(config: YahooChartConfig) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, config })
    }

    /// Build the chart URL for a symbol.
    fn chart_url(&self, symbol: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}?interval={}&range={}",
            self.config.base_url.trim_end_matches('/'),
            encode(symbol),
            encode(&self.config.interval),
            encode(&self.config.range)
        )
    }

    fn map_send_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    }
}

// ============================================================================
// QuoteProvider Implementation
// ============================================================================

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_session_quote(&self, symbol: &str) -> Result<SessionQuote, MarketDataError> {
        let url = self.chart_url(symbol);
        debug!("Fetching chart for {} from Yahoo", symbol);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            s if !s.is_success() => {
                warn!("Yahoo chart request for {} returned {}", symbol, s);
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("HTTP {}", s.as_u16()),
                });
            }
            _ => {}
        }

        let body = response.bytes().await.map_err(Self::map_send_error)?;
        parse_chart_payload(symbol, &body)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Decode a chart document and extract the session quote.
fn parse_chart_payload(symbol: &str, body: &[u8]) -> Result<SessionQuote, MarketDataError> {
    let envelope: YahooChartEnvelope =
        serde_json::from_slice(body).map_err(|e| MarketDataError::MalformedPayload {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse chart response: {}", e),
        })?;

    let meta = envelope.into_meta().map_err(|error| match error {
        Some(e) if e.is_not_found() => MarketDataError::SymbolNotFound(symbol.to_string()),
        Some(e) => MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: e
                .description
                .or(e.code)
                .unwrap_or_else(|| "Unknown chart error".to_string()),
        },
        None => MarketDataError::MalformedPayload {
            provider: PROVIDER_ID.to_string(),
            message: "Chart response has no meta block".to_string(),
        },
    })?;

    Ok(meta_to_session_quote(symbol, meta))
}

/// Convert chart metadata to our SessionQuote model.
fn meta_to_session_quote(symbol: &str, meta: YahooChartMeta) -> SessionQuote {
    SessionQuote {
        symbol: meta.symbol.unwrap_or_else(|| symbol.to_string()),
        regular_price: to_decimal(meta.regular_market_price),
        pre_market_price: to_decimal(meta.pre_market_price),
        post_market_price: to_decimal(meta.post_market_price),
        market_state: MarketState::from_label(meta.market_state.as_deref()),
        currency: meta.currency,
        as_of: meta
            .regular_market_time
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single()),
    }
}

/// Non-finite floats have no Decimal form and are treated as absent.
fn to_decimal(value: Option<f64>) -> Option<Decimal> {
    value.and_then(Decimal::from_f64_retain)
}

// ============================================================================
// Tests
// ============================================================================
