//! Notification error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("notification service unavailable")]
    Unavailable,

    #[error("webhook rejected the notification: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notify command failed: {0}")]
    CommandFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeliveryError>;
