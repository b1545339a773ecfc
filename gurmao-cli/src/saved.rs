//! Saved-collection commands: `save`, `unsave`, `toggle` and `saved`.

use std::collections::BTreeSet;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Args;
use gurmao_core::{DEFAULT_SAVED_FILE, JsonFileCollection, SavedCollection};
use log::info;
use serde::Serialize;

use crate::{ARG_STORE, CliError, write_json};

/// Location of the saved-collection file.
#[derive(Debug, Clone, Args)]
pub(crate) struct StoreArgs {
    /// JSON file holding saved restaurant ids.
    #[arg(long = ARG_STORE, value_name = "path", default_value = DEFAULT_SAVED_FILE)]
    pub(crate) store: Utf8PathBuf,
}

/// A restaurant id plus the collection it belongs to.
#[derive(Debug, Clone, Args)]
pub(crate) struct ToggleArgs {
    /// Restaurant id.
    #[arg(value_name = "id")]
    pub(crate) id: String,
    #[command(flatten)]
    pub(crate) store: StoreArgs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SavedAction {
    Save(String),
    Unsave(String),
    Toggle(String),
    List,
}

#[derive(Debug, Serialize)]
struct SavedState<'a> {
    id: &'a str,
    saved: bool,
}

#[derive(Debug, Serialize)]
struct SavedList {
    saved: BTreeSet<String>,
}

pub(crate) fn run_saved(
    action: SavedAction,
    store: &StoreArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut collection = JsonFileCollection::new(store.store.clone());
    apply(&mut collection, action, writer)
}

pub(crate) fn apply(
    collection: &mut dyn SavedCollection,
    action: SavedAction,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match action {
        SavedAction::Save(id) => {
            collection.save(&id)?;
            info!("saved {id}");
            write_json(writer, &SavedState { id: &id, saved: true })
        }
        SavedAction::Unsave(id) => {
            collection.unsave(&id)?;
            info!("unsaved {id}");
            write_json(writer, &SavedState { id: &id, saved: false })
        }
        SavedAction::Toggle(id) => {
            let saved = collection.toggle(&id)?;
            info!("toggled {id}; saved: {saved}");
            write_json(writer, &SavedState { id: &id, saved })
        }
        SavedAction::List => {
            let saved = collection.saved_ids()?;
            write_json(writer, &SavedList { saved })
        }
    }
}
