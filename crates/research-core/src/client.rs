//! HTTP client wrapper.
//!
//! Resolves paths against the configured base URL, applies the timeout,
//! and reduces every failure to one [`ApiError`]. The transport's own error
//! text is logged and then discarded.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use research_types::{config::ClientConfig, ApiError, Result};
use crate::ports::{HttpMethod, HttpRequest, HttpTransport};

pub struct ApiClient {
    config: ClientConfig,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Rc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// An empty 2xx body parses as `Value::Null`.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, String)],
    ) -> Result<Value> {
        let request_id = short_request_id();
        let req = HttpRequest {
            method,
            url: self.config.endpoint(path),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: body.map(Value::to_string),
            timeout_ms: self.config.timeout_ms,
        };

        if self.config.log_requests {
            log::debug!("[API Request {}] {} {}", request_id, method.as_str(), path);
        }

        let response = match self.transport.send(req).await {
            Ok(r) => r,
            Err(e) => {
                let err = ApiError::from(e.clone());
                log::error!("[API Error {}] {} {}: {} ({})", request_id, method.as_str(), path, err, e);
                return Err(err);
            }
        };

        if self.config.log_requests {
            log::debug!("[API Response {}] {} {}", request_id, response.status, path);
        }

        if !response.is_success() {
            let err = ApiError::HttpStatus(response.status);
            log::error!("[API Error {}] {}: {}", request_id, response.status, err);
            return Err(err);
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("[API Error {}] undecodable body from {}: {}", request_id, path, e);
            ApiError::from(e)
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let value = self.send(HttpMethod::Get, path, None, query).await?;
        decode(path, value)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let value = self.send(HttpMethod::Post, path, Some(&body), &[]).await?;
        decode(path, value)
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        log::error!("[API Error] unexpected response shape from {}: {}", path, e);
        ApiError::from(e)
    })
}

/// Correlates a request log line with its response line.
fn short_request_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
