use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use quotedeck_market_data::YahooChartConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub upstream: YahooChartConfig,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("QD_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid QD_LISTEN_ADDR")?;
        let cors_allow = env_or("QD_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let defaults = YahooChartConfig::default();
        let upstream = YahooChartConfig {
            base_url: env_or("QD_QUOTE_BASE_URL", &defaults.base_url),
            interval: env_or("QD_CHART_INTERVAL", &defaults.interval),
            range: env_or("QD_CHART_RANGE", &defaults.range),
            timeout: millis_or("QD_UPSTREAM_TIMEOUT_MS", 8000),
        };
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: millis_or("QD_REQUEST_TIMEOUT_MS", 30000),
            upstream,
            static_dir: env_or("QD_STATIC_DIR", "dist"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn millis_or(key: &str, default: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default);
    Duration::from_millis(ms)
}
