// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Event Manager client for the five REST operations.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{Event, EventDraft, EventId};

/// Client for the Event Manager backend.
///
/// # Example
///
/// ```ignore
/// use eventman_client::{ApiConfig, EventApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     base_url: "http://127.0.0.1:8000/api".to_string(),
///     ..Default::default()
/// };
///
/// let api = EventApi::new(config)?;
/// let events = api.list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventApi {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl EventApi {
    /// Creates a new Event Manager client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Fetches all events, in the order the backend returns them.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success response or transport failure.
    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        let url = self.full_url("/event_list_create");
        tracing::debug!(%url, "listing events");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        Ok(resp.json().await?)
    }

    /// Fetches one event by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no event has the identifier,
    /// or another error on failure.
    pub async fn get(&self, id: &EventId) -> Result<Event, ApiError> {
        let url = self.detail_url(id);
        tracing::debug!(%url, "fetching event");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        Ok(resp.json().await?)
    }

    /// Creates an event from the editable field set; returns the
    /// created event including its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success response or transport failure.
    pub async fn create(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        let url = self.full_url("/event_list_create");
        tracing::debug!(%url, title = %draft.title, "creating event");
        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(draft))
            .await?;
        Ok(resp.json().await?)
    }

    /// Replaces the editable fields of an existing event in full.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success response or transport failure.
    pub async fn update(&self, id: &EventId, draft: &EventDraft) -> Result<Event, ApiError> {
        let url = self.detail_url(id);
        tracing::debug!(%url, title = %draft.title, "updating event");
        let resp = self
            .http
            .execute(self.http.build_request(Method::PUT, &url).json(draft))
            .await?;
        Ok(resp.json().await?)
    }

    /// Deletes an event. The response body carries nothing meaningful
    /// and is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on any non-success response or transport failure.
    pub async fn delete(&self, id: &EventId) -> Result<(), ApiError> {
        let url = self.detail_url(id);
        tracing::debug!(%url, "deleting event");
        self.http
            .execute(self.http.build_request(Method::DELETE, &url))
            .await?;
        Ok(())
    }

    fn full_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn detail_url(&self, id: &EventId) -> String {
        self.full_url(&format!("/event_detail/{id}/"))
    }
}
