// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST transport against the appliance.
//!
//! One client is built from the asset configuration at initialization;
//! every call applies basic auth and a per-request deadline. Status codes
//! are mapped to the connector error taxonomy here so action handlers only
//! ever see a 200 response.

use crate::config::AssetConfig;
use crate::error::{server_error_detail, ConnectorError};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// Capture download endpoint
pub const ENDPOINT_GET_CAPTURE: &str = "/sdk/packets";

/// Parser/feed upload endpoint on the decoder
pub const ENDPOINT_UPLOAD_PARSER: &str = "/decoder/parsers/upload";

/// Device restart endpoint
pub const ENDPOINT_RESTART: &str = "/sys?msg=shutdown";

/// Deadline for capture and upload calls
pub const DEFAULT_REST_TIMEOUT: Duration = Duration::from_secs(300);

/// Shorter deadline for the connectivity test
pub const CONNECTIVITY_TEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A successful (HTTP 200) appliance response
#[derive(Clone, Debug)]
pub struct RestResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RestResponse {
    /// Whether the response carries capture data the connector can stage
    pub fn has_capture_content_type(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| {
            ct.contains("application/octet-stream") || ct.contains("application/json")
        })
    }
}

/// HTTP client bound to one configured asset
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl RestClient {
    /// Build a client from the asset configuration
    pub fn new(config: &AssetConfig) -> Result<Self, ConnectorError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_server_cert)
            .build()
            .map_err(ConnectorError::Connection)?;

        Ok(Self {
            http,
            base_url: config.url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint, optionally with form-encoded body fields
    pub async fn get(
        &self,
        endpoint: &str,
        form: Option<&[(&'static str, String)]>,
        timeout: Duration,
    ) -> Result<RestResponse, ConnectorError> {
        let mut request = self.http.get(self.url(endpoint));
        if let Some(fields) = form {
            request = request.form(fields);
        }
        self.execute(request, timeout).await
    }

    /// POST a multipart form to an endpoint
    pub async fn post_multipart(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
        timeout: Duration,
    ) -> Result<RestResponse, ConnectorError> {
        let request = self.http.post(self.url(endpoint)).multipart(form);
        self.execute(request, timeout).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        timeout: Duration,
    ) -> Result<RestResponse, ConnectorError> {
        let request = request
            .basic_auth(&self.username, Some(&self.password))
            .timeout(timeout);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ConnectorError::Timeout
            } else {
                ConnectorError::Connection(e)
            }
        })?;

        let status = response.status().as_u16();
        debug!(status, "appliance response");

        if status != 200 {
            return Err(ConnectorError::Server {
                status,
                detail: server_error_detail(status).to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(ConnectorError::Connection)?
            .to_vec();

        Ok(RestResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
#[path = "rest_tests.rs"]
mod tests;
