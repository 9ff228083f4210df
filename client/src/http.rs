// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with status-code mapping.

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for Event Manager operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { client })
    }

    /// Builds a request for the given method and URL.
    pub fn build_request(&self, method: reqwest::Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Executes a request and maps non-success statuses to typed errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails at the transport level or
    /// the backend answers with a non-success status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(resp),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(resp.url().path().to_string())),
            StatusCode::BAD_REQUEST => Err(ApiError::Validation(read_body(resp).await)),
            status if status.is_server_error() => {
                Err(ApiError::Server(status.as_u16(), read_body(resp).await))
            }
            status => Err(ApiError::Http(format!("{status}: {}", read_body(resp).await))),
        }
    }
}

async fn read_body(resp: Response) -> String {
    resp.text()
        .await
        .unwrap_or_else(|_| "Unable to read response".to_string())
}
