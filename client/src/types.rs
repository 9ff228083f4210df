// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the Event Manager REST contract.

use std::fmt;

/// Opaque, server-assigned event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates an identifier from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A calendar event as persisted by the backend.
///
/// `description` and `venue` may be null or absent in responses; both
/// map to "no value" rather than failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Server-assigned identifier.
    pub id: EventId,
    /// Title of the event.
    pub title: String,
    /// Optional multi-line description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional venue.
    #[serde(default)]
    pub venue: Option<String>,
    /// Calendar date as an ISO string (`YYYY-MM-DD`).
    pub date: String,
    /// Time of day, stored verbatim.
    pub time: String,
}

impl Event {
    /// Returns the description if it is present and non-empty.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the venue if it is present and non-empty.
    #[must_use]
    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref().filter(|s| !s.is_empty())
    }
}

/// The editable field set sent on create and update.
///
/// Optional fields travel as empty strings, matching what the backend
/// expects from the form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventDraft {
    /// Title of the event.
    pub title: String,
    /// Description, empty when unset.
    pub description: String,
    /// Venue, empty when unset.
    pub venue: String,
    /// Calendar date as an ISO string (`YYYY-MM-DD`).
    pub date: String,
    /// Time of day.
    pub time: String,
}
