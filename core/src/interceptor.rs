//! Outbound request interceptors.
//!
//! # Design
//! An `InterceptorChain` is an ordered list of interceptors in front of a
//! `Transport`. Each interceptor receives the request plus a `Next`
//! continuation and must call `next.run(..)` exactly once; the last `Next`
//! hands the request to the transport. The remote client installs
//! `BasicAuthInterceptor` first and `LogInterceptor` second so the log shows
//! the request exactly as it goes out.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{info, Dispatch};

use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};

const AUTHORIZATION: &str = "authorization";

/// A stage that observes or mutates an outbound request.
pub trait Interceptor: Send + Sync {
    fn intercept(&self, request: HttpRequest, next: Next<'_>) -> Result<HttpResponse, TransportError>;
}

/// The remainder of the chain after the current interceptor.
pub struct Next<'a> {
    rest: &'a [Box<dyn Interceptor>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    pub fn run(self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        match self.rest.split_first() {
            Some((head, rest)) => head.intercept(
                request,
                Next {
                    rest,
                    transport: self.transport,
                },
            ),
            None => self.transport.execute(&request),
        }
    }
}

/// Ordered interceptors applied to every request.
#[derive(Default)]
pub struct InterceptorChain {
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `interceptor` after the ones already installed.
    pub fn with(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    pub fn execute(&self, request: HttpRequest, transport: &dyn Transport) -> Result<HttpResponse, TransportError> {
        Next {
            rest: &self.interceptors,
            transport,
        }
        .run(request)
    }
}

/// Static username/password pair for HTTP Basic auth.
#[derive(Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic <base64(username:password)>`
    pub fn header_value(&self) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", self.username, self.password)))
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Adds an `authorization: Basic ..` header unless one is already present.
#[derive(Debug, Clone)]
pub struct BasicAuthInterceptor {
    header_value: String,
}

impl BasicAuthInterceptor {
    pub fn new(credentials: &BasicCredentials) -> Self {
        Self {
            header_value: credentials.header_value(),
        }
    }
}

impl Interceptor for BasicAuthInterceptor {
    fn intercept(&self, mut request: HttpRequest, next: Next<'_>) -> Result<HttpResponse, TransportError> {
        if !request.has_header(AUTHORIZATION) {
            request
                .headers
                .push((AUTHORIZATION.to_string(), self.header_value.clone()));
        }
        next.run(request)
    }
}

/// Logs method, URL, headers and body, then forwards the request unchanged.
///
/// Events go to the injected dispatcher rather than the thread's default, so
/// the owner decides where request logs end up.
#[derive(Clone)]
pub struct LogInterceptor {
    dispatch: Dispatch,
}

impl LogInterceptor {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }
}

impl Interceptor for LogInterceptor {
    fn intercept(&self, request: HttpRequest, next: Next<'_>) -> Result<HttpResponse, TransportError> {
        tracing::dispatcher::with_default(&self.dispatch, || {
            info!("Request: {} {}", request.method, request.url);
            for (name, values) in request.grouped_headers() {
                info!("{}: {}", name, values.join(", "));
            }
            info!("Body: {}", request.body.as_deref().unwrap_or_default());
        });
        next.run(request)
    }
}
