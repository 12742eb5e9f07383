use crate::domain::errors::FeedError;
use anyhow::Result;
use async_trait::async_trait;

// Need async_trait for async functions in traits
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Fetch the raw market listing body from the exchange.
    async fn fetch_markets(&self) -> Result<String, FeedError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Dispatch a notification. Callers treat failures as best-effort.
    async fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Append-only sink for price observations. Implementations must never
/// propagate failures to the caller.
pub trait PriceLog: Send + Sync {
    fn append(&self, timestamp: &str, price: f64);
}
