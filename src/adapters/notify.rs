use crate::domain::ports::NotificationSink;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Headless notification sink: renders notifications into the service log.
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<()> {
        tracing::info!("🔔 {}", title);
        for line in body.lines() {
            tracing::info!("   {}", line);
        }
        Ok(())
    }
}
