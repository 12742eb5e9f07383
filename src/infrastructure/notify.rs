use crate::domain::ports::Notifier;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

/// Desktop notifications via `notify-send`. Fire-and-forget from the
/// monitor's point of view: the caller swallows any error we return.
pub struct DesktopNotifier;

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        let status = tokio::process::Command::new("notify-send")
            .arg(title)
            .arg(body)
            .status()
            .await
            .context("Failed to spawn notify-send")?;

        if !status.success() {
            anyhow::bail!("notify-send exited with {}", status);
        }
        Ok(())
    }
}

/// Discards notifications; wired in when desktop notifications are disabled.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        info!("Notification suppressed: {} — {}", title, body);
        Ok(())
    }
}
