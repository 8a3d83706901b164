//! Error types for recipe API calls.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`RecipeClient`](crate::RecipeClient) methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("Recipe API request failed with status {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Server-provided error message, or the status reason
        message: String,
    },

    /// The recipe addressed by ID does not exist.
    #[error("Recipe {id} not found")]
    NotFound {
        /// The requested recipe ID
        id: i64,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON encoding or decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status associated with this error, if the server answered.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Network(_) | Self::InvalidUrl(_) | Self::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let error = ClientError::Http {
            status: 400,
            message: "Recipe name is required".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("Recipe name is required"));
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_not_found_error_message() {
        let error = ClientError::NotFound { id: 7 };
        assert_eq!(error.to_string(), "Recipe 7 not found");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_invalid_url_has_no_status() {
        let error: ClientError = url::Url::parse("not a url").unwrap_err().into();
        assert!(error.to_string().starts_with("Invalid URL"));
        assert_eq!(error.status(), None);
    }
}
