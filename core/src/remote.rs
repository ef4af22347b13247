//! Remote posts client: builder, interceptor chain and transport in one call.
//!
//! Each method builds the request with `PostClient`, runs it through the
//! chain and parses the answer. Calls block the current thread for the
//! duration of the exchange.

use std::sync::Arc;

use tracing::Dispatch;

use crate::client::PostClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::interceptor::{BasicAuthInterceptor, BasicCredentials, InterceptorChain, LogInterceptor};
use crate::types::{CreatePostRequest, Post, UpdatePostRequest};

pub struct RemotePostClient {
    client: PostClient,
    chain: InterceptorChain,
    transport: Arc<dyn Transport>,
}

impl RemotePostClient {
    pub fn new(client: PostClient, chain: InterceptorChain, transport: Arc<dyn Transport>) -> Self {
        Self {
            client,
            chain,
            transport,
        }
    }

    /// Client with the standard chain: Basic auth first, request log second.
    pub fn with_basic_auth(
        base_url: &str,
        credentials: &BasicCredentials,
        log: Dispatch,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let chain = InterceptorChain::new()
            .with(BasicAuthInterceptor::new(credentials))
            .with(LogInterceptor::new(log));
        Self::new(PostClient::new(base_url), chain, transport)
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.send(self.client.build_list_posts())?;
        self.client.parse_list_posts(response)
    }

    pub fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        let response = self.send(self.client.build_get_post(id))?;
        self.client.parse_get_post(response)
    }

    pub fn create_post(&self, input: &CreatePostRequest) -> Result<Post, ApiError> {
        let response = self.send(self.client.build_create_post(input)?)?;
        self.client.parse_create_post(response)
    }

    pub fn update_post(&self, id: i64, input: &UpdatePostRequest) -> Result<Post, ApiError> {
        let response = self.send(self.client.build_update_post(id, input)?)?;
        self.client.parse_update_post(response)
    }

    pub fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_post(id))?;
        self.client.parse_delete_post(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Ok(self.chain.execute(request, self.transport.as_ref())?)
    }
}
