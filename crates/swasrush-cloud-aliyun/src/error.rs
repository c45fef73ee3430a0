//! Aliyun provider error types

use swasrush_cloud::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AliyunError {
    /// The API answered with an error document
    #[error("{message}")]
    Api {
        code: String,
        message: String,
        recommend: Option<String>,
        request_id: Option<String>,
    },

    /// Non-2xx response whose body is not an API error document
    #[error("HTTP {status}: {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid access key secret: {0}")]
    InvalidKey(String),
}

impl AliyunError {
    /// Request ID echoed by the API, useful when contacting support
    pub fn request_id(&self) -> Option<&str> {
        match self {
            AliyunError::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

impl From<AliyunError> for ProviderError {
    fn from(err: AliyunError) -> Self {
        if let Some(request_id) = err.request_id() {
            tracing::debug!(request_id, "API request rejected");
        }
        match err {
            AliyunError::Api {
                code,
                message,
                recommend,
                ..
            } => {
                let error = ProviderError::new(message).with_code(code);
                match recommend {
                    Some(recommend) => error.with_diagnostic(recommend),
                    None => error,
                }
            }
            other => ProviderError::new(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AliyunError>;
