//! Provider error types

use thiserror::Error;

/// Placeholder used when the provider gives no diagnostic hint
pub const NO_DIAGNOSTIC: &str = "no diagnostic information";

/// Error returned by a provider call.
///
/// Whatever the vendor client raises (API rejection, transport failure,
/// undecodable response) is translated into this single shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    /// Human-readable message
    pub message: String,

    /// Vendor error code (e.g. "NotEnoughStock"), if any
    pub code: Option<String>,

    /// Diagnostic hint supplied by the vendor, if any
    pub diagnostic: Option<String>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            diagnostic: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }

    /// Message and diagnostic, as shown in the failure report
    pub fn describe(&self) -> String {
        let diagnostic = self
            .diagnostic
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DIAGNOSTIC);
        format!("Purchase failed: {}\nDiagnostic: {}", self.message, diagnostic)
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
