use std::{collections::BTreeMap, sync::Arc};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{PriceQuery, PriceResponse, TickerPrice, TickerPrices},
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use quotedeck_market_data::Instrument;

/// Upper bound on tickers per request.
const MAX_SYMBOLS: usize = 25;

/// Resolve one or more tickers.
///
/// Tickers have no futures proxy, so an unusable spot price is reported as
/// `0` with the fetched market state. Only malformed requests fail.
#[utoipa::path(
    get,
    path = "/api/price",
    params(PriceQuery),
    responses(
        (status = 200, description = "Price for `symbol`, or a map of prices for `symbols`", body = TickerPrice),
        (status = 400, description = "No symbol given, or too many symbols")
    )
)]
pub async fn get_price(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PriceQuery>,
) -> ApiResult<Json<PriceResponse>> {
    let timestamp = Utc::now().timestamp_millis();

    if let Some(symbols) = q.symbols.as_deref() {
        let symbols = parse_symbols(symbols)?;
        let instruments: Vec<Instrument> = symbols.into_iter().map(Instrument::ticker).collect();
        let snapshot = state.resolver.resolve_all(&instruments).await;
        let quotes: BTreeMap<String, TickerPrice> = snapshot
            .iter()
            .map(|(symbol, quote)| {
                (
                    symbol.to_string(),
                    TickerPrice::from_quote(symbol, quote, timestamp),
                )
            })
            .collect();
        return Ok(Json(PriceResponse::Many(TickerPrices { quotes, timestamp })));
    }

    let symbol = q
        .symbol
        .as_deref()
        .and_then(normalize_symbol)
        .ok_or_else(|| ApiError::BadRequest("Missing symbol".to_string()))?;
    let quote = state
        .resolver
        .resolve_or_default(&Instrument::ticker(symbol.clone()))
        .await;
    Ok(Json(PriceResponse::Single(TickerPrice::from_quote(
        &symbol, &quote, timestamp,
    ))))
}

/// Trim and upper-case a ticker; blank input yields `None`.
fn normalize_symbol(raw: &str) -> Option<String> {
    let symbol = raw.trim();
    if symbol.is_empty() {
        None
    } else {
        Some(symbol.to_ascii_uppercase())
    }
}

/// Split a comma separated list, dropping blanks and duplicates.
fn parse_symbols(raw: &str) -> ApiResult<Vec<String>> {
    let mut symbols: Vec<String> = Vec::new();
    for symbol in raw.split(',').filter_map(normalize_symbol) {
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    if symbols.is_empty() {
        return Err(ApiError::BadRequest("Missing symbols".to_string()));
    }
    if symbols.len() > MAX_SYMBOLS {
        return Err(ApiError::BadRequest(format!(
            "At most {} symbols per request",
            MAX_SYMBOLS
        )));
    }
    Ok(symbols)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/price", get(get_price))
}
