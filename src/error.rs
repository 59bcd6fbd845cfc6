use reqwest::StatusCode;
use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration error
    ConfigError(String),
    /// HTTP request error (preserves reqwest::Error for timeout/connect detection)
    HttpRequest(reqwest::Error),
    /// Upstream API returned a non-success status
    UpstreamError { status: StatusCode, message: String },
    /// Response body did not match the expected shape
    InvalidBody(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::HttpRequest(err) => write!(f, "HTTP request error: {}", err),
            Self::UpstreamError { status, message } => {
                write!(f, "Upstream error ({}): {}", status, message)
            }
            Self::InvalidBody(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Message suitable for end-user display.
    ///
    /// Every fetch-path failure collapses into the same "data unavailable"
    /// wording; the underlying cause is still logged at the call site.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigError(msg) => format!("Configuration problem: {}", msg),
            Self::HttpRequest(_) | Self::UpstreamError { .. } | Self::InvalidBody(_) => {
                "Failed to fetch skip data".to_string()
            }
        }
    }
}

// Implement conversions from common error types
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpRequest(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::ConfigError("postcode missing".to_string());
        assert_eq!(error.to_string(), "Configuration error: postcode missing");

        let error = AppError::UpstreamError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Upstream error (500 Internal Server Error): boom"
        );
    }

    #[test]
    fn test_user_message_collapses_fetch_failures() {
        let upstream = AppError::UpstreamError {
            status: StatusCode::BAD_GATEWAY,
            message: "gateway down".to_string(),
        };
        let body = AppError::InvalidBody("expected array".to_string());

        assert_eq!(upstream.user_message(), "Failed to fetch skip data");
        assert_eq!(body.user_message(), "Failed to fetch skip data");
    }
}
