// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use cliclack::{input, intro, outro};
use colored::Colorize;

use crate::editor::{FieldEditor, FieldSet};

/// User-interaction capability for the views. Injected so view logic
/// runs (and is tested) without a terminal.
pub trait Ui {
    /// Asks for a yes/no confirmation before a destructive action.
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows a transient status line, e.g. while a call is in flight.
    fn notify(&mut self, message: &str);

    /// Surfaces a blocking failure notice.
    fn notify_error(&mut self, message: &str);
}

/// Terminal implementation of [`Ui`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn confirm(&mut self, message: &str) -> bool {
        cliclack::confirm(message)
            .initial_value(false)
            .interact()
            .unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message.italic());
    }

    fn notify_error(&mut self, message: &str) {
        eprintln!("{} {message}", "Error:".red());
    }
}

/// Terminal field editor: one cliclack prompt per editable field.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptEditor;

impl FieldEditor for PromptEditor {
    fn edit(&mut self, heading: &str, initial: &FieldSet) -> Result<Option<FieldSet>, Box<dyn Error>> {
        edit_field_set(heading, initial)
    }
}

/// Runs one interactive pass over the field set. Returns `None` when
/// the user cancels, discarding the entered values.
fn edit_field_set(heading: &str, initial: &FieldSet) -> Result<Option<FieldSet>, Box<dyn Error>> {
    intro(heading)?;

    let fields = match gather(initial) {
        Ok(fields) => fields,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            outro("Cancelled")?;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    outro("Field set complete")?;
    Ok(Some(fields))
}

fn gather(initial: &FieldSet) -> io::Result<FieldSet> {
    // title, date and time are the required form fields; the values are
    // not validated further before the network call
    Ok(FieldSet {
        title: text_input("Title", "", &initial.title, true)?,
        description: text_input("Description", "", &initial.description, false)?,
        venue: text_input("Venue", "", &initial.venue, false)?,
        date: text_input("Date", "e.g. 2024-05-01", &initial.date, true)?,
        time: text_input("Time", "e.g. 10:00", &initial.time, true)?,
    })
}

fn text_input(prompt: &str, placeholder: &str, initial: &str, required: bool) -> io::Result<String> {
    let mut field = input(prompt).required(required);
    if !placeholder.is_empty() {
        field = field.placeholder(placeholder);
    }
    if !initial.is_empty() {
        field = field.default_input(initial);
    }
    field.interact()
}
