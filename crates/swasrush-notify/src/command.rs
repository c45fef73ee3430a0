//! External command delivery
//!
//! Runs a user-supplied program (a notify script, `notify-send`, ...) with
//! the title and body appended as its last two arguments.

use crate::error::{DeliveryError, Result};
use crate::notifier::Notifier;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

pub struct CommandNotifier {
    program: String,
    args: Vec<String>,
}

impl CommandNotifier {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

#[async_trait]
impl Notifier for CommandNotifier {
    fn name(&self) -> &str {
        "command"
    }

    async fn send(&self, title: &str, body: &str) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.arg(title).arg(body);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running: {} {}", self.program, self.args.join(" "));

        let output = cmd.output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DeliveryError::CommandFailed(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
