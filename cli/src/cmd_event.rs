// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use eventman_client::{Event, EventApi, EventId};

use crate::editor::{FieldSet, submit_loop};
use crate::event_formatter::EventFormatter;
use crate::list_view::ListView;
use crate::prompt::{PromptEditor, Ui};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy, Default)]
pub struct CmdEventList {
    pub output_format: OutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events")
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, api: &EventApi, ui: &mut impl Ui) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        show_list(api, ui, self.output_format).await
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub title: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,

    pub interactive: bool,
    pub output_format: OutputFormat,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a new event")
            .arg(arg!(title: [TITLE] "Title of the event"))
            .arg(arg!(--description <DESCRIPTION> "Description of the event"))
            .arg(arg!(--venue <VENUE> "Venue of the event"))
            .arg(arg!(--date <DATE> "Date of the event (YYYY-MM-DD)"))
            .arg(arg!(--time <TIME> "Time of the event (HH:MM)"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let title = matches.get_one::<String>("title").cloned();
        let description = matches.get_one::<String>("description").cloned();
        let venue = matches.get_one::<String>("venue").cloned();
        let date = matches.get_one::<String>("date").cloned();
        let time = matches.get_one::<String>("time").cloned();

        // no arguments at all means an interactive editing session
        let interactive = title.is_none()
            && description.is_none()
            && venue.is_none()
            && date.is_none()
            && time.is_none();

        if !interactive && (title.is_none() || date.is_none() || time.is_none()) {
            return Err("Title, date and time are required for a new event".into());
        }

        Ok(Self {
            title,
            description,
            venue,
            date,
            time,

            interactive,
            output_format: OutputFormat::from(matches),
        })
    }

    pub async fn run(self, api: &EventApi, ui: &mut impl Ui) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating event...");
        let created = if self.interactive {
            let initial = FieldSet::default();
            submit_loop(api, &mut PromptEditor, ui, "Create Event", initial, None).await?
        } else {
            let fields = FieldSet {
                title: self.title.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
                venue: self.venue.unwrap_or_default(),
                date: self.date.unwrap_or_default(),
                time: self.time.unwrap_or_default(),
            };
            ui.notify("Creating event...");
            Some(api.create(&fields.into_draft()).await?)
        };

        match created {
            Some(event) => {
                tracing::info!(id = %event.id, "event created");
                show_list(api, ui, self.output_format).await
            }
            None => {
                tracing::info!("user cancelled the event creation");
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: EventId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,

    pub interactive: bool,
    pub output_format: OutputFormat,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event")
            .arg(arg!(id: <ID> "The id of the event to edit"))
            .arg(arg!(title: -t --title <TITLE> "Title of the event"))
            .arg(arg!(--description <DESCRIPTION> "Description of the event"))
            .arg(arg!(--venue <VENUE> "Venue of the event"))
            .arg(arg!(--date <DATE> "Date of the event (YYYY-MM-DD)"))
            .arg(arg!(--time <TIME> "Time of the event (HH:MM)"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let id = EventId::new(
            matches
                .get_one::<String>("id")
                .expect("id is required")
                .clone(),
        );
        let title = matches.get_one::<String>("title").cloned();
        let description = matches.get_one::<String>("description").cloned();
        let venue = matches.get_one::<String>("venue").cloned();
        let date = matches.get_one::<String>("date").cloned();
        let time = matches.get_one::<String>("time").cloned();

        let interactive = title.is_none()
            && description.is_none()
            && venue.is_none()
            && date.is_none()
            && time.is_none();

        Self {
            id,
            title,
            description,
            venue,
            date,
            time,

            interactive,
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, api: &EventApi, ui: &mut impl Ui) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");

        // fetch-then-populate; a load failure surfaces as a blocking
        // notice and the view never reaches editing
        ui.notify("Loading event...");
        let event = api.get(&self.id).await?;
        let mut fields = FieldSet::from_event(&event);

        let updated = if self.interactive {
            submit_loop(api, &mut PromptEditor, ui, "Edit Event", fields, Some(&self.id)).await?
        } else {
            if let Some(title) = self.title {
                fields.title = title;
            }
            if let Some(description) = self.description {
                fields.description = description;
            }
            if let Some(venue) = self.venue {
                fields.venue = venue;
            }
            if let Some(date) = self.date {
                fields.date = date;
            }
            if let Some(time) = self.time {
                fields.time = time;
            }
            ui.notify("Updating event...");
            Some(api.update(&self.id, &fields.into_draft()).await?)
        };

        match updated {
            Some(event) => {
                tracing::info!(id = %event.id, "event updated");
                show_list(api, ui, self.output_format).await
            }
            None => {
                tracing::info!(id = %self.id, "user cancelled the event editing");
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: EventId,
    pub output_format: OutputFormat,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(arg!(id: <ID> "The id of the event to delete"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: EventId::new(
                matches
                    .get_one::<String>("id")
                    .expect("id is required")
                    .clone(),
            ),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, api: &EventApi, ui: &mut impl Ui) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let mut view = ListView::new();
        view.load(api, ui).await;
        view.delete(api, ui, &self.id).await;
        print_events(view.events(), self.output_format);
        Ok(())
    }
}

async fn show_list(
    api: &EventApi,
    ui: &mut impl Ui,
    output_format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let mut view = ListView::new();
    view.load(api, ui).await;
    print_events(view.events(), output_format);
    Ok(())
}

fn print_events(events: &[Event], output_format: OutputFormat) {
    let formatter = EventFormatter::new().with_output_format(output_format);
    println!("{}", formatter.format(events));
}
