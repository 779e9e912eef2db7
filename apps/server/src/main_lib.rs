use std::sync::Arc;

use crate::config::Config;
use quotedeck_market_data::{
    Instrument, PriceResolver, QuoteProvider, YahooProvider, INDEX_INSTRUMENTS,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub resolver: PriceResolver,
    /// Instruments served by the market overview
    pub instruments: &'static [Instrument],
}

pub fn init_tracing() {
    let log_format = std::env::var("QD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = YahooProvider::new(config.upstream.clone())?;
    tracing::info!(
        "Quote provider {} at {} (interval={}, range={}, timeout={:?})",
        provider.id(),
        config.upstream.base_url,
        config.upstream.interval,
        config.upstream.range,
        config.upstream.timeout
    );
    Ok(build_state_with_provider(Arc::new(provider)))
}

/// Build state around any provider; tests inject scripted ones here.
pub fn build_state_with_provider(provider: Arc<dyn QuoteProvider>) -> Arc<AppState> {
    Arc::new(AppState {
        resolver: PriceResolver::new(provider),
        instruments: &INDEX_INSTRUMENTS,
    })
}
