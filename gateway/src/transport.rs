//! ureq-backed `Transport`.
//!
//! Non-2xx statuses come back as data so the core client decides what they
//! mean; only failures to complete the exchange become `TransportError`.

use posts_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&req.url), &req.headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&req.url), &req.headers).call(),
            (HttpMethod::Post, Some(body)) => with_headers(self.agent.post(&req.url), &req.headers).send(body.as_bytes()),
            (HttpMethod::Post, None) => with_headers(self.agent.post(&req.url), &req.headers).send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(&req.url), &req.headers).send(body.as_bytes()),
            (HttpMethod::Put, None) => with_headers(self.agent.put(&req.url), &req.headers).send_empty(),
        };
        let mut response = result.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
