//! Local REST gateway that proxies `/posts` CRUD calls to a remote API.
//!
//! # Design
//! - Handlers are thin: each one hands a single `RemotePostClient` call to
//!   the blocking pool and maps the outcome to a response.
//! - The remote client is built once at startup and shared through
//!   `AppState`; it holds no per-request state.
//! - Only remote 4xx failures are translated (to an empty 400). Anything
//!   else becomes an empty 500.

pub mod config;
pub mod error;
pub mod handlers;
pub mod transport;

use std::sync::Arc;

use axum::{routing::get, Router};
use posts_core::RemotePostClient;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::Dispatch;

pub use config::{ConfigError, GatewayConfig};
pub use error::{GatewayError, Operation};
pub use handlers::AppState;
pub use transport::UreqTransport;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(handlers::list_posts).post(handlers::create_post))
        .route(
            "/posts/{id}",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Remote client for `config`, with request logs sent to `log`.
pub fn remote_client(config: &GatewayConfig, log: Dispatch) -> RemotePostClient {
    RemotePostClient::with_basic_auth(
        &config.posts_base_url,
        &config.credentials,
        log,
        Arc::new(UreqTransport::new()),
    )
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
