use http::StatusCode;
use parlance_core::HttpError;
use thiserror::Error;

/// Errors surfaced by the translation layer
#[derive(Debug, Error)]
pub enum LlmError {
    /// Requested model is not registered and the resolver returned nothing
    #[error("model not found: {model}")]
    ModelNotFound {
        /// The model id the client asked for
        model: String,
    },

    /// Client sent a malformed or invalid request body
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An image reference in the request does not parse as a URL
    #[error("malformed image url: {url}")]
    MalformedUrl {
        /// The offending reference
        url: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// Request lacks an `Authorization` bearer key
    #[error("missing API key")]
    MissingApiKey,

    /// Bearer key failed the host's verification
    #[error("invalid API key")]
    InvalidApiKey,

    /// The model collaborator failed
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ModelNotFound { .. } | Self::InvalidRequest(_) | Self::MalformedUrl { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingApiKey | Self::InvalidApiKey => StatusCode::FORBIDDEN,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::ModelNotFound { .. } | Self::InvalidRequest(_) | Self::MalformedUrl { .. } => {
                "invalid_request_error"
            }
            Self::MissingApiKey | Self::InvalidApiKey => "authentication_error",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "an internal error occurred".to_owned(),
            other => other.to_string(),
        }
    }
}
