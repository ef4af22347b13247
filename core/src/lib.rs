//! Synchronous API client core for a remote posts service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! `Transport`; `RemotePostClient` runs each request through an
//! `InterceptorChain` (Basic auth, then request logging) before handing it
//! to that transport.
//!
//! # Design
//! - `PostClient` is stateless, it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and testable without a server.
//! - Interceptors are plain trait objects composed through a `Next`
//!   continuation; nothing is registered globally.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod remote;
pub mod types;

pub use client::PostClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use interceptor::{BasicAuthInterceptor, BasicCredentials, Interceptor, InterceptorChain, LogInterceptor, Next};
pub use remote::RemotePostClient;
pub use types::{CreatePostRequest, Post, UpdatePostRequest};
