//! Error types for extraction gateway operations.

use std::fmt;
use thiserror::Error;

/// The category of an extraction error.
///
/// High-level classification used for logging and retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractErrorCode {
    /// Credentials are missing, invalid or expired.
    AuthenticationFailed,
    /// Network error - connection failed, timeout, DNS resolution, etc.
    NetworkError,
    /// Rate limit exceeded - too many requests.
    RateLimited,
    /// The model endpoint returned an error (5xx status codes).
    ServerError,
    /// The model produced something that is not a usable completion
    /// (non-JSON text, empty response, missing choices).
    MalformedResponse,
    /// The completion was JSON but violated the record schema - missing
    /// field, empty name, unparsable or partial timestamp.
    SchemaViolation,
    /// Configuration error - missing or invalid gateway config.
    ConfigurationError,
}

impl ExtractErrorCode {
    /// Returns true if this error is transient and the request may be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError | Self::RateLimited | Self::ServerError
        )
    }

    /// Returns a stable name for this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "authentication_failed",
            Self::NetworkError => "network_error",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::MalformedResponse => "malformed_response",
            Self::SchemaViolation => "schema_violation",
            Self::ConfigurationError => "configuration_error",
        }
    }
}

impl fmt::Display for ExtractErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error that occurred while extracting an event from free text.
#[derive(Debug, Error)]
pub struct ExtractError {
    /// The error code categorizing this error.
    code: ExtractErrorCode,
    /// A human-readable message describing the error.
    message: String,
    /// The underlying cause of this error, if any.
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ExtractError {
    /// Creates a new extraction error with the given code and message.
    pub fn new(code: ExtractErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::AuthenticationFailed, message)
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::NetworkError, message)
    }

    /// Creates a rate limit error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::RateLimited, message)
    }

    /// Creates a server error.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::ServerError, message)
    }

    /// Creates a malformed response error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::MalformedResponse, message)
    }

    /// Creates a schema violation error.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::SchemaViolation, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::ConfigurationError, message)
    }

    /// Sets the source error for this error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> ExtractErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this error is transient and may be retried.
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// A specialized Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_retryable() {
        assert!(ExtractErrorCode::NetworkError.is_retryable());
        assert!(ExtractErrorCode::RateLimited.is_retryable());
        assert!(ExtractErrorCode::ServerError.is_retryable());
        assert!(!ExtractErrorCode::AuthenticationFailed.is_retryable());
        assert!(!ExtractErrorCode::SchemaViolation.is_retryable());
        assert!(!ExtractErrorCode::MalformedResponse.is_retryable());
    }

    #[test]
    fn error_code_display() {
        assert_eq!(
            ExtractErrorCode::MalformedResponse.as_str(),
            "malformed_response"
        );
        assert_eq!(ExtractErrorCode::SchemaViolation.as_str(), "schema_violation");
    }

    #[test]
    fn error_creation() {
        let err = ExtractError::schema("start_time is not a timestamp");
        assert_eq!(err.code(), ExtractErrorCode::SchemaViolation);
        assert_eq!(err.message(), "start_time is not a timestamp");
        assert!(!err.is_retryable());
    }

    #[test]
    fn error_display() {
        let err = ExtractError::rate_limited("too many requests");
        let display = format!("{}", err);
        assert!(display.contains("rate_limited"));
        assert!(display.contains("too many requests"));
    }

    #[test]
    fn error_with_source() {
        use std::error::Error;
        let io_err = std::io::Error::other("connection reset");
        let err = ExtractError::network("request failed").with_source(io_err);
        assert!(err.source().is_some());
    }
}
