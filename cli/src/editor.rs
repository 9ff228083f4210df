// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use eventman_client::{Event, EventApi, EventDraft, EventId};

use crate::prompt::Ui;

/// Transient, view-local copy of an event's editable attributes, held
/// only for the duration of an editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub title: String,
    pub description: String,
    pub venue: String,
    pub date: String,
    pub time: String,
}

impl FieldSet {
    /// Populates the field set from a fetched event. Null or absent
    /// optional fields map to empty text.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            venue: event.venue.clone().unwrap_or_default(),
            date: event.date.clone(),
            time: event.time.clone(),
        }
    }

    /// Converts the field set into the wire draft sent on submit.
    pub fn into_draft(self) -> EventDraft {
        EventDraft {
            title: self.title,
            description: self.description,
            venue: self.venue,
            date: self.date,
            time: self.time,
        }
    }
}

/// Capability that gathers one pass of field edits. The terminal
/// implementation lives in [`crate::prompt`]; tests script it.
pub trait FieldEditor {
    /// Lets the user edit the field set, starting from `initial`.
    /// Returns `None` when the session is cancelled.
    fn edit(&mut self, heading: &str, initial: &FieldSet)
    -> Result<Option<FieldSet>, Box<dyn Error>>;
}

/// Drives a create or edit session: `editing` until submit, then
/// `submitting` while the call is in flight. On failure the session
/// returns to `editing` with the entered values preserved; on success
/// the caller "navigates away". `id` fixes the target for the lifetime
/// of an edit session; `None` means create.
pub async fn submit_loop(
    api: &EventApi,
    editor: &mut impl FieldEditor,
    ui: &mut impl Ui,
    heading: &str,
    mut fields: FieldSet,
    id: Option<&EventId>,
) -> Result<Option<Event>, Box<dyn Error>> {
    loop {
        let Some(edited) = editor.edit(heading, &fields)? else {
            tracing::info!("user cancelled the editing session");
            return Ok(None);
        };
        fields = edited;

        ui.notify(match id {
            None => "Creating event...",
            Some(_) => "Updating event...",
        });

        let draft = fields.clone().into_draft();
        let result = match id {
            None => api.create(&draft).await,
            Some(id) => api.update(id, &draft).await,
        };

        match result {
            Ok(event) => return Ok(Some(event)),
            // back to editing, held field values preserved
            Err(e) => ui.notify_error(&format!("Failed to save event: {e}")),
        }
    }
}
