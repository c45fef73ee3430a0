//! Console + file logging
//!
//! The subscriber is installed as the default for the current thread only,
//! so the binary runs on a current-thread runtime.

use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Logging handle created once at process start
pub struct Logger {
    file: Arc<File>,
    _guard: DefaultGuard,
}

impl Logger {
    /// Log to stdout and append to `log_file`. `RUST_LOG` overrides the `info` default.
    pub fn init(log_file: &Path) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("ログファイルを開けません: {}", log_file.display()))?;
        let file = Arc::new(file);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stdout))
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::clone(&file)),
            );

        let guard = tracing::subscriber::set_default(subscriber);
        Ok(Self {
            file,
            _guard: guard,
        })
    }

    /// Flush the log file and uninstall the subscriber
    pub fn finish(self) -> std::io::Result<()> {
        self.file.sync_all()
    }
}
