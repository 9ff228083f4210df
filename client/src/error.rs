// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Event Manager client errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, TLS).
    Network(String),

    /// The requested resource does not exist (HTTP 404).
    NotFound(String),

    /// The backend rejected the submitted fields (HTTP 400).
    Validation(String),

    /// The backend failed (HTTP 5xx).
    Server(u16, String),

    /// Any other non-success response.
    Http(String),

    /// The response body could not be decoded.
    InvalidResponse(String),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {e}"),
            Self::NotFound(path) => write!(f, "Resource not found: {path}"),
            Self::Validation(e) => write!(f, "Backend rejected the request: {e}"),
            Self::Server(status, e) => write!(f, "Server error ({status}): {e}"),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::InvalidResponse(e) => write!(f, "Invalid server response: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        match e.is_decode() {
            true => Self::InvalidResponse(e.to_string()),
            false => Self::Network(e.to_string()),
        }
    }
}
