//! Yahoo Finance chart API response models.
//!
//! The chart endpoint nests everything under `chart.result[0].meta`; cached
//! or proxied copies sometimes drop the outer `chart` wrapper or hand over the
//! bare `meta` object. All three shapes are accepted.

use serde::Deserialize;

/// Any of the accepted payload shapes.
///
/// Variant order matters: each variant requires its own top-level key, and
/// the first one that matches wins.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YahooChartEnvelope {
    Chart { chart: YahooChart },
    Meta { meta: YahooChartMeta },
    Result { result: Vec<YahooChartResult> },
}

impl YahooChartEnvelope {
    /// Take the first `meta` block out of the payload.
    pub fn into_meta(self) -> Result<YahooChartMeta, Option<YahooChartError>> {
        match self {
            Self::Chart { chart } => chart
                .result
                .and_then(first_meta)
                .ok_or(chart.error),
            Self::Meta { meta } => Ok(meta),
            Self::Result { result } => first_meta(result).ok_or(None),
        }
    }
}

fn first_meta(results: Vec<YahooChartResult>) -> Option<YahooChartMeta> {
    results.into_iter().next().and_then(|r| r.meta)
}

/// The `chart` container
#[derive(Debug, Deserialize)]
pub struct YahooChart {
    pub result: Option<Vec<YahooChartResult>>,
    pub error: Option<YahooChartError>,
}

/// Individual chart result; indicators and timestamps are ignored
#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    pub meta: Option<YahooChartMeta>,
}

/// Session metadata for the charted symbol
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub regular_market_price: Option<f64>,
    pub pre_market_price: Option<f64>,
    pub post_market_price: Option<f64>,
    pub market_state: Option<String>,
    pub regular_market_time: Option<i64>,
}

/// Error block returned alongside a null `result`
#[derive(Debug, Deserialize)]
pub struct YahooChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl YahooChartError {
    pub fn is_not_found(&self) -> bool {
        self.code
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case("Not Found"))
    }
}
