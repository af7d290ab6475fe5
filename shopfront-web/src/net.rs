//! Browser fetch transport for the order service.

use async_trait::async_trait;
use shopfront_core::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn send_error(err: gloo_net::Error) -> TransportError {
    TransportError::Send(err.to_string())
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.path),
            Method::Post => gloo_net::http::Request::post(&request.path),
        };
        let prepared = match request.body {
            Some(body) => builder.json(&body).map_err(send_error)?,
            None => builder.build().map_err(send_error)?,
        };
        let response = prepared.send().await.map_err(send_error)?;
        let status = response.status();
        // Success responses may carry no body at all; only the status is
        // load-bearing for the coordinator.
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        Ok(HttpResponse { status, body })
    }
}
