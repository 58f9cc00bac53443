use http::StatusCode;

/// Errors from writing a structured error as an HTTP response
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The envelope could not be serialized
    #[error("failed to serialize error envelope: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The response writer rejected the head or body
    #[error("failed to write error response: {0}")]
    Write(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from reading a structured error out of an HTTP response
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The response carried no body, or only whitespace
    #[error("{status} response has an empty body")]
    EmptyBody {
        /// Status of the received response
        status: StatusCode,
    },

    /// The response declared a media type other than JSON
    #[error("{status} response has unsupported content type {content_type:?}")]
    UnsupportedContentType {
        /// Status of the received response
        status: StatusCode,
        /// Raw `Content-Type` header value
        content_type: String,
    },

    /// The body is not a well-formed error envelope
    #[error("{status} response body is not an error envelope: {source}")]
    Malformed {
        /// Status of the received response
        status: StatusCode,
        /// Parser failure describing what was wrong
        source: serde_json::Error,
    },

    /// The envelope names an error code outside the registry
    #[error("{status} response has unknown error code {code:?}")]
    UnknownErrorCode {
        /// Status of the received response
        status: StatusCode,
        /// The unrecognized wire token
        code: String,
    },

    /// Reading the body failed
    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client failed while receiving the body
    #[cfg(feature = "reqwest")]
    #[error("failed to receive response body: {0}")]
    Http(#[from] reqwest::Error),
}

impl DecodeError {
    /// Status of the response that failed to decode, when one was received
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::EmptyBody { status }
            | Self::UnsupportedContentType { status, .. }
            | Self::Malformed { status, .. }
            | Self::UnknownErrorCode { status, .. } => Some(*status),
            Self::Io(_) => None,
            #[cfg(feature = "reqwest")]
            Self::Http(_) => None,
        }
    }
}
