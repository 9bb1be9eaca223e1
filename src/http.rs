// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Outbound HTTP
//!
//! A single-attempt client for small control-plane payloads: the request
//! body is written in full, the response body is buffered in memory, and
//! there is no timeout, no retry, and no streaming.
//!
//! Responses that declare `content-type: application/json` are decoded as
//! JSON; a body that fails to parse despite the header is a fatal error.
//! Any other content type is returned as raw text.

use async_trait::async_trait;
use reqwest::Method;
use std::fmt;
use tracing::debug;

use crate::errors::SpecflowError;

/// Options for a single HTTP request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Header name/value pairs, sent as-is
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => {
                write!(f, "{}", serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?)
            }
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Decode a response body according to its declared content type
///
/// The match is exact: parameterized types such as
/// `application/json; charset=utf-8` are treated as plain text.
pub fn decode_body(content_type: Option<&str>, body: String) -> Result<ResponseBody, SpecflowError> {
    if content_type == Some("application/json") {
        let value = serde_json::from_str(&body)
            .map_err(|e| SpecflowError::JsonDecode { source: e })?;
        Ok(ResponseBody::Json(value))
    } else {
        Ok(ResponseBody::Text(body))
    }
}

/// Trait for issuing a single outbound HTTP request
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<ResponseBody, SpecflowError>;
}

/// HTTP client backed by reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("specflow/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn request(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<ResponseBody, SpecflowError> {
        debug!(url, method = %options.method, "issuing request");

        let mut request = self.client.request(options.method, url);
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let network_error = |e: reqwest::Error| SpecflowError::Network {
            url: url.to_string(),
            source: e,
        };

        // Status codes are deliberately not inspected: a completed exchange
        // counts as success and the body is handed back for logging.
        let response = request.send().await.map_err(network_error)?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.text().await.map_err(network_error)?;

        decode_body(content_type.as_deref(), body)
    }
}
