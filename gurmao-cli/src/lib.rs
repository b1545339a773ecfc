//! Command-line interface for the Gurmao recommendation engine.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod recommend;
mod saved;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use saved::{SavedAction, StoreArgs, ToggleArgs, run_saved};

const ARG_CATALOG: &str = "catalog";
const ARG_JITTER: &str = "jitter";
const ARG_SEED: &str = "seed";
const ARG_SAVED: &str = "saved";
const ARG_STORE: &str = "store";
const JITTER_NONE: &str = "none";
const JITTER_SEEDED: &str = "seeded";
const JITTER_SYSTEM: &str = "system";

/// Run the Gurmao CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend(*args, writer),
        Command::Save(args) => run_saved(SavedAction::Save(args.id), &args.store, writer),
        Command::Unsave(args) => run_saved(SavedAction::Unsave(args.id), &args.store, writer),
        Command::Toggle(args) => run_saved(SavedAction::Toggle(args.id), &args.store, writer),
        Command::Saved(args) => run_saved(SavedAction::List, &args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "gurmao",
    about = "Restaurant recommendations by mood, occasion and city",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the catalog for a query and explain the top pick.
    Recommend(Box<RecommendArgs>),
    /// Add a restaurant to the saved collection.
    Save(ToggleArgs),
    /// Remove a restaurant from the saved collection.
    Unsave(ToggleArgs),
    /// Flip the saved state of a restaurant.
    Toggle(ToggleArgs),
    /// List saved restaurant ids.
    Saved(StoreArgs),
}

/// Print `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
