#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use quotedeck_market_data::{
    MarketDataError, MarketState, QuoteProvider, SessionQuote, YahooChartConfig,
};
use quotedeck_server::{api::app_router, build_state_with_provider, config::Config};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

/// Provider answering from a fixed table; unknown symbols fail like an
/// unreachable upstream.
#[derive(Default)]
pub struct ScriptedProvider {
    quotes: HashMap<String, SessionQuote>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regular(self, symbol: &str, price: Option<Decimal>, state: MarketState) -> Self {
        self.quote(SessionQuote::regular(symbol, price, state))
    }

    pub fn quote(mut self, quote: SessionQuote) -> Self {
        self.quotes.insert(quote.symbol.clone(), quote);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "SCRIPTED"
    }

    async fn fetch_session_quote(&self, symbol: &str) -> Result<SessionQuote, MarketDataError> {
        self.calls.lock().unwrap().push(symbol.to_string());
        self.quotes
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: "SCRIPTED".to_string(),
                message: "HTTP 503".to_string(),
            })
    }
}

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        upstream: YahooChartConfig::default(),
        static_dir: "dist".to_string(),
    }
}

pub fn test_router(provider: Arc<ScriptedProvider>) -> Router {
    let config = test_config();
    app_router(build_state_with_provider(provider), &config)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
