//! Demo host for the path-building combinators.
//!
//! Replays a scenario file (app state plus a path of screens) through the demo
//! navigation tree and prints which views the builders produced.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use pathbuilder::app::tree::View;
use pathbuilder::exit_codes;
use pathbuilder::io::scenario::{create_scenario, example_scenario, write_scenario};
use pathbuilder::logging;
use pathbuilder::resolve::{ResolveOutcome, resolve_from_file};

#[derive(Parser)]
#[command(
    name = "pathbuilder",
    version,
    about = "Resolve navigation paths through conditional path builders"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the view stack for a scenario file.
    Resolve {
        /// Scenario TOML file.
        scenario: PathBuf,
        /// Print the stack as a JSON array instead of one view per line.
        #[arg(long)]
        json: bool,
    },
    /// Write an example scenario file.
    Init {
        /// Destination TOML file.
        scenario: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Resolve { scenario, json } => cmd_resolve(&scenario, json),
        Command::Init { scenario, force } => cmd_init(&scenario, force),
    }
}

fn cmd_resolve(scenario: &Path, json: bool) -> Result<i32> {
    match resolve_from_file(scenario)? {
        ResolveOutcome::Resolved(views) => {
            print_views(&views, json)?;
            Ok(exit_codes::OK)
        }
        ResolveOutcome::Partial { views, unclaimed } => {
            print_views(&views, json)?;
            eprintln!(
                "{} path entries above depth {} were not claimed in {}",
                unclaimed,
                views.len(),
                scenario.display()
            );
            Ok(exit_codes::PARTIAL)
        }
        ResolveOutcome::NoMatch => {
            eprintln!("no builder claimed the path in {}", scenario.display());
            Ok(exit_codes::NO_MATCH)
        }
    }
}

fn print_views(views: &[View], json: bool) -> Result<()> {
    if json {
        let payload = serde_json::to_string_pretty(views).context("serialize views")?;
        println!("{}", payload);
    } else {
        for view in views {
            println!("{}", view);
        }
    }
    Ok(())
}

fn cmd_init(scenario: &Path, force: bool) -> Result<i32> {
    let example = example_scenario();
    if force {
        write_scenario(scenario, &example)
    } else {
        create_scenario(scenario, &example)
    }
    .with_context(|| format!("write {}", scenario.display()))?;
    info!(path = %scenario.display(), force, "example scenario written");
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolve() {
        let cli = Cli::parse_from(["pathbuilder", "resolve", "scenario.toml"]);
        assert!(matches!(
            cli.command,
            Command::Resolve { json: false, ref scenario } if scenario == Path::new("scenario.toml")
        ));
    }

    #[test]
    fn parse_resolve_json() {
        let cli = Cli::parse_from(["pathbuilder", "resolve", "--json", "s.toml"]);
        assert!(matches!(cli.command, Command::Resolve { json: true, .. }));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["pathbuilder", "init", "-f", "s.toml"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }
}
