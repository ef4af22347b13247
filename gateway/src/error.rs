//! Translation of remote failures into gateway responses.
//!
//! Remote 4xx answers of any kind become an empty `400 Bad Request` and are
//! logged against the operation that hit them. Everything else is left
//! untranslated and surfaces as an empty `500`.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use posts_core::ApiError;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

/// Controller operations, used to tag failure logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPosts,
    GetPost,
    CreatePost,
    UpdatePost,
    DeletePost,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListPosts => "list_posts",
            Operation::GetPost => "get_post",
            Operation::CreatePost => "create_post",
            Operation::UpdatePost => "update_post",
            Operation::DeletePost => "delete_post",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::ListPosts => "Error getting posts",
            Operation::GetPost => "Error getting post",
            Operation::CreatePost => "Error creating post",
            Operation::UpdatePost => "Error updating post",
            Operation::DeletePost => "Error deleting post",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The remote service answered with a 4xx; already logged.
    #[error("remote rejected the request")]
    BadRequest,

    #[error("{operation} failed: {source}")]
    Upstream {
        operation: Operation,
        source: ApiError,
    },

    #[error("remote call did not complete: {0}")]
    Worker(#[from] JoinError),
}

impl GatewayError {
    /// Client errors are logged and collapsed to `BadRequest`; anything else
    /// is carried through as `Upstream`.
    pub fn from_remote(operation: Operation, err: ApiError) -> Self {
        if err.is_client_error() {
            error!(
                operation = operation.name(),
                status = err.status(),
                error = %err,
                "{}",
                operation.failure_message()
            );
            GatewayError::BadRequest
        } else {
            GatewayError::Upstream { operation, source: err }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            other => {
                error!(error = %other, "unhandled gateway failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use posts_core::TransportError;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn client_error(status: u16) -> ApiError {
        ApiError::ClientError {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn every_client_error_collapses_to_bad_request() {
        for status in [400, 401, 404, 409, 422] {
            let err = GatewayError::from_remote(Operation::GetPost, client_error(status));
            assert!(matches!(err, GatewayError::BadRequest), "status {status}");
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn other_failures_become_internal_errors() {
        let server = GatewayError::from_remote(
            Operation::ListPosts,
            ApiError::HttpError {
                status: 503,
                body: String::new(),
            },
        );
        let transport = GatewayError::from_remote(
            Operation::DeletePost,
            TransportError("connection refused".to_string()).into(),
        );
        assert!(matches!(server, GatewayError::Upstream { .. }));
        assert_eq!(server.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(transport.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn translated_failure_is_logged_with_operation_and_error() {
        let cases = [
            (Operation::ListPosts, 401, "list_posts", "Error getting posts"),
            (Operation::GetPost, 404, "get_post", "Error getting post"),
            (Operation::CreatePost, 422, "create_post", "Error creating post"),
            (Operation::UpdatePost, 404, "update_post", "Error updating post"),
            (Operation::DeletePost, 409, "delete_post", "Error deleting post"),
        ];

        for (operation, status, name, message) in cases {
            let log = CapturedLog::default();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(log.clone())
                .with_ansi(false)
                .finish();

            tracing::subscriber::with_default(subscriber, || {
                GatewayError::from_remote(operation, client_error(status));
            });

            let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
            assert!(text.contains(message), "{name}: {text}");
            assert!(text.contains(&format!("operation=\"{name}\"")), "{name}: {text}");
            assert!(text.contains(&format!("status={status}")), "{name}: {text}");
            assert!(text.contains(&format!("client error {status}")), "{name}: {text}");
        }
    }

    #[test]
    fn operation_names() {
        assert_eq!(Operation::ListPosts.to_string(), "list_posts");
        assert_eq!(Operation::CreatePost.failure_message(), "Error creating post");
    }
}
