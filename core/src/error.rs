//! Error types for the posts API client.
//!
//! # Design
//! Every 4xx answer from the remote service lands in `ClientError`, whatever
//! the exact code. That is the only class the gateway translates; all other
//! non-2xx responses land in `HttpError` and travel on untouched.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `PostClient` parse methods and `RemotePostClient` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request with a 4xx status.
    #[error("client error {status}: {body}")]
    ClientError { status: u16, body: String },

    /// The server returned a non-2xx status outside the 4xx range.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// True for remote 4xx responses.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::ClientError { .. })
    }

    /// Status code of the remote response, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ClientError { status, .. } | ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_client_errors_report_as_client_errors() {
        let not_found = ApiError::ClientError {
            status: 404,
            body: String::new(),
        };
        let server = ApiError::HttpError {
            status: 503,
            body: String::new(),
        };
        let transport = ApiError::from(TransportError("connection refused".to_string()));
        assert!(not_found.is_client_error());
        assert!(!server.is_client_error());
        assert!(!transport.is_client_error());
    }

    #[test]
    fn status_is_reported_only_for_answered_requests() {
        let conflict = ApiError::ClientError {
            status: 409,
            body: String::new(),
        };
        assert_eq!(conflict.status(), Some(409));
        assert_eq!(ApiError::DeserializationError("eof".to_string()).status(), None);
    }

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::ClientError {
            status: 409,
            body: "conflict".to_string(),
        };
        assert_eq!(err.to_string(), "client error 409: conflict");
    }
}
