use std::fmt;

/// Error type for Rollbar API operations
#[derive(Debug)]
pub enum RollbarError {
    /// Network-level failure before a response was received
    Transport(reqwest::Error),
    /// HTTP 404, or an API-level not-found signal
    NotFound,
    /// HTTP 401
    Unauthorized,
    /// Any other failure reported by the API
    Api {
        status: u16,
        code: i64,
        message: String,
    },
    /// Arguments rejected before any request was sent
    Validation(String),
    /// The API answered with something the client cannot accept
    Unexpected(String),
    /// A paginated listing did not terminate within the page bound
    PageLimit { max_pages: u32 },
    /// JSON parsing error
    Json(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// Configuration error
    Config(String),
}

impl RollbarError {
    /// True for HTTP 404 and API-level not-found answers
    pub fn is_not_found(&self) -> bool {
        matches!(self, RollbarError::NotFound)
    }

    /// True when the API rejected the call because of rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, RollbarError::Api { status: 429, .. })
    }
}

impl fmt::Display for RollbarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollbarError::Transport(e) => write!(f, "HTTP request failed: {}", e),
            RollbarError::NotFound => write!(f, "not found"),
            RollbarError::Unauthorized => write!(f, "unauthorized"),
            RollbarError::Api {
                status,
                code,
                message,
            } => write!(f, "API error (status {}, err {}): {}", status, code, message),
            RollbarError::Validation(msg) => write!(f, "invalid arguments: {}", msg),
            RollbarError::Unexpected(msg) => write!(f, "unexpected API response: {}", msg),
            RollbarError::PageLimit { max_pages } => {
                write!(f, "listing did not end within {} pages", max_pages)
            }
            RollbarError::Json(msg) => write!(f, "JSON error: {}", msg),
            RollbarError::TokenNotFound(msg) => write!(f, "{}", msg),
            RollbarError::Credentials(msg) => write!(f, "{}", msg),
            RollbarError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for RollbarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RollbarError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RollbarError {
    fn from(err: reqwest::Error) -> Self {
        RollbarError::Transport(err)
    }
}

impl From<serde_json::Error> for RollbarError {
    fn from(err: serde_json::Error) -> Self {
        RollbarError::Json(err.to_string())
    }
}

impl From<std::io::Error> for RollbarError {
    fn from(err: std::io::Error) -> Self {
        RollbarError::Credentials(err.to_string())
    }
}

/// Result type alias for Rollbar operations
pub type Result<T> = std::result::Result<T, RollbarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = RollbarError::Api {
            status: 500,
            code: 1,
            message: "Internal error".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RollbarError>();
    }

    #[test]
    fn test_is_not_found() {
        assert!(RollbarError::NotFound.is_not_found());
        assert!(!RollbarError::Unauthorized.is_not_found());
    }

    #[test]
    fn test_is_rate_limited() {
        let err = RollbarError::Api {
            status: 429,
            code: 1,
            message: "Too many requests".to_string(),
        };
        assert!(err.is_rate_limited());
        assert!(!RollbarError::NotFound.is_rate_limited());
    }

    #[test]
    fn test_validation_display() {
        let err = RollbarError::Validation("name is blank".to_string());
        assert!(err.to_string().contains("name is blank"));
    }

    #[test]
    fn test_page_limit_display() {
        let err = RollbarError::PageLimit { max_pages: 5 };
        assert!(err.to_string().contains("5 pages"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RollbarError = json_err.into();
        match err {
            RollbarError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected RollbarError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RollbarError = io_err.into();
        match err {
            RollbarError::Credentials(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected RollbarError::Credentials"),
        }
    }

    #[test]
    fn test_error_source_none_for_api() {
        use std::error::Error;
        let err = RollbarError::Unauthorized;
        assert!(err.source().is_none());
    }
}
