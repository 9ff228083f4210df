// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Colorize;
use eventman_client::Event;

use crate::util::{OutputFormat, format_long_date};

const EMPTY_STATE: &str = "No events yet\nCreate your first event to get started";

/// Renders events as cards (or raw JSON), one per event, mirroring the
/// list page of the web front-end.
#[derive(Debug)]
pub struct EventFormatter {
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

impl Default for EventFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            OutputFormat::Table => match self.events {
                [] => write!(f, "{}", EMPTY_STATE.italic()),
                events => {
                    for (i, event) in events.iter().enumerate() {
                        if i > 0 {
                            writeln!(f)?;
                        }
                        write_card(f, event)?;
                    }
                    Ok(())
                }
            },
        }
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, event: &Event) -> fmt::Result {
    writeln!(
        f,
        "{} {}",
        event.title.bold(),
        format!("#{}", event.id).dimmed()
    )?;
    writeln!(f, "  📅 {}", format_long_date(&event.date))?;
    writeln!(f, "  🕒 {}", event.time)?;
    // venue and description rows are omitted entirely when empty
    if let Some(venue) = event.venue() {
        writeln!(f, "  📍 {venue}")?;
    }
    if let Some(description) = event.description() {
        writeln!(f, "  {}", description.dimmed())?;
    }
    Ok(())
}
