//! Command-line interface.
//!
//! With no subcommand the binary launches the TUI. The subcommands print
//! static information and exit without touching the terminal.

mod completions;

use crate::data::{self, DataKind};
use crate::nav::Route;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Condor: explore Colombia from your terminal
#[derive(Parser, Debug)]
#[command(name = "condor", version, about = "Explore places, read reviews and share adventures from the terminal", long_about = None)]
pub struct Cli {
    /// Colour theme: dark, light or nocolor (overrides the config file)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Route to open first, e.g. "home" or "details/Cartagena"
    #[arg(long, value_name = "ROUTE")]
    pub start: Option<String>,

    /// Use this config file instead of ~/.config/condor/config.toml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable colours (same as `NO_COLOR=1`)
    #[arg(long, global = true)]
    pub no_colors: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the navigation routes
    Routes,
    /// Print one of the sample data sets
    Data {
        /// Which data set to print
        #[arg(value_enum)]
        kind: DataKind,
        /// Print JSON instead of one line per record
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config path from `--config`, or the default location
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Parse `--start` when given
    pub fn start_route(&self) -> Result<Option<Route>> {
        self.start
            .as_deref()
            .map(|path| Route::parse(path).with_context(|| format!("Invalid --start {:?}", path)))
            .transpose()
    }

    /// Run a subcommand. Returns `false` when there was none and the TUI
    /// should start.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Routes) => {
                print!("{}", routes_table());
                Ok(true)
            }
            Some(Commands::Data { kind, json }) => {
                print!("{}", data_listing(*kind, *json)?);
                Ok(true)
            }
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Route table as aligned text
pub fn routes_table() -> String {
    let table = Route::table();
    let width = table.iter().map(|(pattern, _)| pattern.len()).max().unwrap_or(0);
    table
        .iter()
        .map(|(pattern, description)| format!("{:width$}  {}\n", pattern, description, width = width))
        .collect()
}

/// A data set as pretty JSON or one line per record
pub fn data_listing(kind: DataKind, json: bool) -> Result<String> {
    if json {
        let value = data::dump(kind)?;
        let mut out = serde_json::to_string_pretty(&value).context("Failed to serialize data")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(data::describe(kind)
            .into_iter()
            .map(|line| line + "\n")
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::parse_from(["condor", "--start", "home", "--theme", "light"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.start_route().unwrap(), Some(Route::Home));
        assert_eq!(cli.theme.as_deref(), Some("light"));
    }

    #[test]
    fn test_bad_start_route_is_an_error() {
        let cli = Cli::parse_from(["condor", "--start", "nowhere"]);
        assert!(cli.start_route().is_err());
    }

    #[test]
    fn test_data_subcommand() {
        let cli = Cli::parse_from(["condor", "data", "places", "--json"]);
        match cli.command {
            Some(Commands::Data { kind, json }) => {
                assert_eq!(kind, DataKind::Places);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_routes_table_lists_every_route() {
        let table = routes_table();
        assert_eq!(table.lines().count(), 10);
        assert!(table.contains("details/{place}"));
        assert!(table.lines().next().is_some_and(|l| l.starts_with("inicio")));
    }

    #[test]
    fn test_data_listing_json_parses() {
        let out = data_listing(DataKind::Notifications, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(4));
    }
}
