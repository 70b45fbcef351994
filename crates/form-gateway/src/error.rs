//! Gateway Errors
//!
//! Everything that can go wrong between "form is valid" and "envelope parsed".

use crate::validation::ValidationReport;

/// Common result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// Client-side validation failed; no request was issued
    Rejected(ValidationReport),
    /// The request never produced a response (offline, DNS, CORS, ...)
    Transport(String),
    /// The server answered outside 2xx
    HttpStatus(u16),
    /// The body was not an envelope of the expected shape
    Malformed(String),
}

impl GatewayError {
    /// True for the errors the user can only retry (everything but validation)
    pub fn is_transport_class(&self) -> bool {
        !matches!(self, GatewayError::Rejected(_))
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Rejected(report) => write!(f, "Validation failed: {}", report.joined("; ")),
            GatewayError::Transport(msg) => write!(f, "Transport error: {}", msg),
            GatewayError::HttpStatus(code) => write!(f, "Unexpected HTTP status: {}", code),
            GatewayError::Malformed(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}
