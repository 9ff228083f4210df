// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use eventman_client::EventApi;

use crate::cmd_event::{CmdEventDelete, CmdEventEdit, CmdEventList, CmdEventNew};
use crate::config::parse_config;
use crate::prompt::ConsoleUi;

/// Run the Event Manager command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new("eventman")
            .about("Manage your events: list, create, edit and delete")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/eventman/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/eventman/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventDelete::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdEventList::NAME, matches)) => List(CmdEventList::from(matches)),
            Some((CmdEventNew::NAME, matches)) => New(CmdEventNew::from(matches)?),
            Some((CmdEventEdit::NAME, matches)) => Edit(CmdEventEdit::from(matches)),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            None => List(CmdEventList::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List events
    List(CmdEventList),

    /// Create a new event
    New(CmdEventNew),

    /// Edit an event
    Edit(CmdEventEdit),

    /// Delete an event
    Delete(CmdEventDelete),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let api = EventApi::new(config.api)?;
        let mut ui = ConsoleUi;

        use Commands::*;
        match self {
            List(a) => a.run(&api, &mut ui).await,
            New(a) => a.run(&api, &mut ui).await,
            Edit(a) => a.run(&api, &mut ui).await,
            Delete(a) => a.run(&api, &mut ui).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use eventman_client::EventId;

    use super::*;
    use crate::util::OutputFormat;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_parse_default_list() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_parse_list() {
        let args = vec!["test", "list", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::List(cmd) => assert_eq!(cmd.output_format, OutputFormat::Json),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_ls_alias() {
        let cli = Cli::try_parse_from(vec!["test", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_parse_new() {
        let args = vec!["test", "new", "Launch", "--date", "2024-05-01", "--time", "10:00"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::New(cmd) => {
                assert_eq!(cmd.title, Some("Launch".to_string()));
                assert!(!cmd.interactive);
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::try_parse_from(vec!["test", "edit", "a1"]).unwrap();
        match cli.command {
            Commands::Edit(cmd) => assert_eq!(cmd.id, EventId::from("a1")),
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn test_parse_delete() {
        let cli = Cli::try_parse_from(vec!["test", "delete", "a1"]).unwrap();
        match cli.command {
            Commands::Delete(cmd) => assert_eq!(cmd.id, EventId::from("a1")),
            _ => panic!("Expected Delete command"),
        }
    }
}
