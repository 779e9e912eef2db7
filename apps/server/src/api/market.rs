use std::sync::Arc;

use crate::{main_lib::AppState, models::MarketOverview};
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

/// Resolve every overview instrument.
///
/// Always answers 200: instruments without a usable price report `0` and
/// keep their source tag.
#[utoipa::path(
    get,
    path = "/api/market",
    responses((
        status = 200,
        description = "Flat price per instrument key plus marketState, sources and timestamp"
    ))
)]
pub async fn get_market(State(state): State<Arc<AppState>>) -> Json<MarketOverview> {
    let snapshot = state.resolver.resolve_all(state.instruments).await;
    if snapshot.resolved_count() < snapshot.len() {
        tracing::warn!(
            "Market overview degraded: {}/{} instruments priced",
            snapshot.resolved_count(),
            snapshot.len()
        );
    }
    Json(MarketOverview::from_snapshot(
        &snapshot,
        Utc::now().timestamp_millis(),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/market", get(get_market))
}
