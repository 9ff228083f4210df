// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Scripted capabilities shared by the view tests.

use std::error::Error;

use eventman_client::{ApiConfig, EventApi};
use serde_json::{Value, json};
use wiremock::MockServer;

use crate::editor::{FieldEditor, FieldSet};
use crate::prompt::Ui;

pub fn api_for(server: &MockServer) -> EventApi {
    let config = ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    EventApi::new(config).expect("Failed to create client")
}

pub fn event_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "",
        "venue": "",
        "date": "2024-05-01",
        "time": "10:00"
    })
}

/// A [`Ui`] that records every interaction and answers confirmations
/// from a fixed value.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub confirm_answer: bool,
    pub confirms: Vec<String>,
    pub notices: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingUi {
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirm_answer: answer,
            ..Default::default()
        }
    }
}

impl Ui for RecordingUi {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.confirm_answer
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn notify_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// A [`FieldEditor`] that replays a fixed sequence of editing passes
/// and records the initial values each pass started from.
#[derive(Debug)]
pub struct ScriptedEditor {
    passes: Vec<Option<FieldSet>>,
    pub seen_initials: Vec<FieldSet>,
}

impl ScriptedEditor {
    pub fn new(passes: Vec<Option<FieldSet>>) -> Self {
        Self {
            passes,
            seen_initials: Vec::new(),
        }
    }
}

impl FieldEditor for ScriptedEditor {
    fn edit(
        &mut self,
        _heading: &str,
        initial: &FieldSet,
    ) -> Result<Option<FieldSet>, Box<dyn Error>> {
        self.seen_initials.push(initial.clone());
        assert!(!self.passes.is_empty(), "editor invoked more often than scripted");
        Ok(self.passes.remove(0))
    }
}
