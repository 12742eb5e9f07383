use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the price monitor.
///
/// Every field has a documented default and can be overridden through the
/// environment (a `.env` file is honored at startup).
#[derive(Debug, Clone)]
pub struct Config {
    /// Market-data endpoint returning the full ticker list.
    pub market_url: String,
    /// Trading pair to track, as the exchange spells it (e.g. "XMR-USDT").
    pub pair: String,
    /// Seconds between poll cycles.
    pub poll_interval_secs: u64,
    /// Fractional move since the last observation that triggers an alert
    /// (0.10 = 10%).
    pub alert_threshold: f64,
    /// Path of the append-only price log.
    pub log_path: PathBuf,
    /// Total HTTP request timeout in seconds.
    pub http_timeout_secs: u64,
    /// Whether to dispatch desktop notifications (NOTIFY=off disables).
    pub notifications_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            market_url: "https://tradeogre.com/api/v1/markets".to_string(),
            pair: "XMR-USDT".to_string(),
            poll_interval_secs: 60,
            alert_threshold: 0.10,
            log_path: PathBuf::from("xmr_log.txt"),
            http_timeout_secs: 30,
            notifications_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let market_url = env::var("MARKET_URL").unwrap_or(defaults.market_url);
        let pair = env::var("PAIR").unwrap_or(defaults.pair);

        let poll_interval_secs = env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .context("Failed to parse POLL_INTERVAL_SECS")?;

        let alert_threshold = env::var("ALERT_THRESHOLD")
            .unwrap_or_else(|_| "0.10".to_string())
            .parse::<f64>()
            .context("Failed to parse ALERT_THRESHOLD")?;

        let log_path = env::var("LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_path);

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("Failed to parse HTTP_TIMEOUT_SECS")?;

        let notify_str = env::var("NOTIFY").unwrap_or_else(|_| "on".to_string());
        let notifications_enabled = match notify_str.to_lowercase().as_str() {
            "on" | "true" | "1" => true,
            "off" | "false" | "0" => false,
            other => anyhow::bail!("Invalid NOTIFY: {}. Must be 'on' or 'off'", other),
        };

        let config = Self {
            market_url,
            pair,
            poll_interval_secs,
            alert_threshold,
            log_path,
            http_timeout_secs,
            notifications_enabled,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.pair.is_empty() {
            anyhow::bail!("PAIR must not be empty");
        }
        if self.poll_interval_secs == 0 {
            anyhow::bail!("POLL_INTERVAL_SECS must be greater than zero");
        }
        if self.alert_threshold <= 0.0 {
            anyhow::bail!(
                "ALERT_THRESHOLD must be a positive fraction, got {}",
                self.alert_threshold
            );
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}
