// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_event;
mod config;
mod editor;
mod event_formatter;
mod list_view;
mod prompt;
mod util;

#[cfg(test)]
mod test_support;

pub use crate::{
    cli::{Cli, Commands, run},
    config::Config,
};
