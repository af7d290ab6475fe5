use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request as the coordinator sees it: method, path, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    /// Whether the status counts as success at the transport level.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request could not be sent: {0}")]
    Send(String),
    #[error("no declared interaction matched {0} {1}")]
    Unmatched(Method, String),
}

/// Seam between the coordinator and whatever actually moves bytes: the
/// browser fetch in production, a declared-interaction mock in tests.
///
/// Futures are not `Send` because the wasm transport runs on the
/// single-threaded browser event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_statuses_cover_the_2xx_range() {
        for status in [200, 201, 204, 299] {
            let resp = HttpResponse {
                status,
                body: Value::Null,
            };
            assert!(resp.is_ok(), "status {status} should be ok");
        }
        for status in [199, 300, 404, 500] {
            let resp = HttpResponse {
                status,
                body: Value::Null,
            };
            assert!(!resp.is_ok(), "status {status} should not be ok");
        }
    }

    #[test]
    fn request_constructors_set_method_and_body() {
        let get = HttpRequest::get("/items");
        assert_eq!(get.method, Method::Get);
        assert!(get.body.is_none());

        let post = HttpRequest::post("/purchase", serde_json::json!({"itemId": 1}));
        assert_eq!(post.method, Method::Post);
        assert!(post.body.is_some());
    }
}
