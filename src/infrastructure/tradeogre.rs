use crate::config::Config;
use crate::domain::errors::FeedError;
use crate::domain::ports::MarketFeed;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Market feed backed by TradeOgre's public markets endpoint.
///
/// One GET per poll cycle, whole body buffered in memory. The endpoint needs
/// no authentication; the only non-default header is the User-Agent.
pub struct TradeOgreFeed {
    client: Client,
    url: String,
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl TradeOgreFeed {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: config.market_url.clone(),
        }
    }
}

#[async_trait]
impl MarketFeed for TradeOgreFeed {
    async fn fetch_markets(&self) -> Result<String, FeedError> {
        debug!("Fetching market listing from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::Transport {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(FeedError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| FeedError::Transport {
            reason: e.to_string(),
        })
    }
}
