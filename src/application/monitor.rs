use crate::config::Config;
use crate::domain::movement::{change_fraction, exceeds_alert_threshold, Direction};
use crate::domain::ports::{MarketFeed, Notifier, PriceLog};
use crate::domain::ticker::{extract_price, PriceSample};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Result of one poll cycle. `run` only logs; tests drive `poll_once`
/// directly for a bounded number of iterations.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Transport-level failure; the cycle was skipped.
    FetchFailed,
    /// The pair or its price field was absent from the body; cycle skipped.
    PriceMissing,
    /// A price was observed, logged and classified.
    Observed {
        price: f64,
        change: f64,
        direction: Direction,
        alerted: bool,
    },
}

/// Owns the last observed price and drives fetch → extract → log → alert
/// on a fixed cadence. Constructed via [`PriceMonitor::bootstrap`], which
/// guarantees the state is seeded by one successful observation.
pub struct PriceMonitor {
    config: Config,
    feed: Arc<dyn MarketFeed>,
    price_log: Arc<dyn PriceLog>,
    notifier: Arc<dyn Notifier>,
    last_price: f64,
}

impl PriceMonitor {
    /// One-shot bootstrap: fetch and extract once, failing hard if the feed
    /// is unreachable or the pair cannot be located. The process has no
    /// useful baseline to compare against otherwise.
    pub async fn bootstrap(
        config: Config,
        feed: Arc<dyn MarketFeed>,
        price_log: Arc<dyn PriceLog>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let body = feed
            .fetch_markets()
            .await
            .context("Failed to get initial price")?;

        let price = extract_price(&body, &config.pair);
        if price < 0.0 {
            anyhow::bail!(
                "Failed to get initial price: pair {} not found in market feed",
                config.pair
            );
        }

        info!("Initial {} price: {:.6}", config.pair, price);

        Ok(Self {
            config,
            feed,
            price_log,
            notifier,
            last_price: price,
        })
    }

    pub fn last_price(&self) -> f64 {
        self.last_price
    }

    /// Steady-state polling loop: sleep, poll, repeat until the shutdown
    /// channel fires. The sleep is the only suspension point per cycle.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        let interval = Duration::from_secs(self.config.poll_interval_secs);
        info!(
            "Watching {} every {}s (alert at {:.0}% moves)",
            self.config.pair,
            self.config.poll_interval_secs,
            self.config.alert_threshold * 100.0
        );

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown.changed() => {
                    info!("Shutdown requested. Stopping price monitor.");
                    return;
                }
            }
            self.poll_once().await;
        }
    }

    /// One poll cycle. Failures are recovered locally: the cycle is skipped
    /// and `last_price` keeps its previous value.
    pub async fn poll_once(&mut self) -> PollOutcome {
        let body = match self.feed.fetch_markets().await {
            Ok(body) => body,
            Err(e) => {
                error!("Error fetching price: {}", e);
                return PollOutcome::FetchFailed;
            }
        };

        let price = extract_price(&body, &self.config.pair);
        if price < 0.0 {
            warn!("Pair {} not found in market feed", self.config.pair);
            return PollOutcome::PriceMissing;
        }

        let sample = PriceSample::now(&self.config.pair, price);
        self.price_log.append(&sample.timestamp, sample.price);

        let change = change_fraction(self.last_price, price);
        let pct = change * 100.0;

        let direction = Direction::classify(change);
        match direction {
            Direction::Up => info!("↑ Price up: {:.6} (+{:.2}%)", price, pct),
            Direction::Down => info!("↓ Price down: {:.6} ({:.2}%)", price, pct),
            Direction::Unchanged => info!("= Price unchanged: {:.6}", price),
        }

        let alerted = exceeds_alert_threshold(change, self.config.alert_threshold);
        if alerted {
            let title = format!("🚨 {} ALERT", self.config.pair);
            let message = format!(
                "Price moved {:.2}% ({:.6} → {:.6})",
                pct, self.last_price, price
            );
            // Best effort: a failed notification never interrupts monitoring.
            if let Err(e) = self.notifier.notify(&title, &message).await {
                warn!("Failed to dispatch alert notification: {}", e);
            }
        }

        self.last_price = price;
        PollOutcome::Observed {
            price,
            change,
            direction,
            alerted,
        }
    }
}
