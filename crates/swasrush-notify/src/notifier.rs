//! Notifier capability trait and report dispatch

use crate::command::CommandNotifier;
use crate::error::{DeliveryError, Result};
use crate::report::Report;
use crate::webhook::WebhookNotifier;
use async_trait::async_trait;
use swasrush_config::NotifyConfig;

/// Delivery channel for the final report
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns the notifier name (e.g., "webhook")
    fn name(&self) -> &str;

    /// Whether `send` actually delivers anywhere
    fn is_available(&self) -> bool {
        true
    }

    async fn send(&self, title: &str, body: &str) -> Result<()>;
}

/// Fallback used when no delivery channel is configured
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn send(&self, _title: &str, _body: &str) -> Result<()> {
        Err(DeliveryError::Unavailable)
    }
}

/// Build the notifier selected in the config file
pub fn notifier_from_config(config: Option<&NotifyConfig>) -> Box<dyn Notifier> {
    match config {
        None | Some(NotifyConfig::Log) => Box::new(LogNotifier),
        Some(NotifyConfig::Webhook { url, headers }) => {
            Box::new(WebhookNotifier::new(url.clone(), headers.clone()))
        }
        Some(NotifyConfig::Command { program, args }) => {
            Box::new(CommandNotifier::new(program.clone(), args.clone()))
        }
    }
}

/// Send the report, falling back to the log. Never fails the run.
///
/// Returns whether the report was delivered.
pub async fn dispatch(notifier: &dyn Notifier, report: &Report) -> bool {
    if !notifier.is_available() {
        tracing::warn!("notification service unavailable, writing report to log");
        tracing::info!("{}\n{}", report.title, report.body);
        return false;
    }

    match notifier.send(&report.title, &report.body).await {
        Ok(()) => {
            tracing::info!("Report delivered via {}", notifier.name());
            true
        }
        Err(e) => {
            tracing::error!("Failed to deliver report via {}: {}", notifier.name(), e);
            tracing::info!("{}\n{}", report.title, report.body);
            false
        }
    }
}
