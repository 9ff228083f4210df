// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, arg, value_parser};

/// The output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches.get_one("output-format").copied().unwrap_or_default()
    }
}

/// Formats an ISO date (`YYYY-MM-DD`) in long localized form, e.g.
/// "Wednesday, May 1, 2024". Dates that do not parse are shown
/// verbatim, matching how the time field is handled.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
