use std::sync::Arc;

use xmrwatch::application::monitor::PriceMonitor;
use xmrwatch::config::Config;
use xmrwatch::domain::ports::Notifier;
use xmrwatch::infrastructure::notify::{DesktopNotifier, NoopNotifier};
use xmrwatch::infrastructure::price_log::FilePriceLog;
use xmrwatch::infrastructure::tradeogre::TradeOgreFeed;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    info!("Starting xmrwatch for {} via {}", config.pair, config.market_url);

    let feed = Arc::new(TradeOgreFeed::new(&config));
    let price_log = Arc::new(FilePriceLog::new(config.log_path.clone()));
    let notifier: Arc<dyn Notifier> = if config.notifications_enabled {
        Arc::new(DesktopNotifier)
    } else {
        Arc::new(NoopNotifier)
    };

    // Bootstrap failure is the only fatal path: without a first observation
    // there is nothing to compare against. A non-zero exit status follows
    // from returning the error.
    let mut monitor = PriceMonitor::bootstrap(config, feed, price_log, notifier).await?;

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    monitor.run(shutdown_rx).await;
    Ok(())
}
