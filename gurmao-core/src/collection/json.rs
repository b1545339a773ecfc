//! Saved collection persisted as a JSON array of ids.
//!
//! The file layout matches the browser's `gurmao_saved` local-storage entry,
//! so an exported anonymous session can be used directly.

use std::collections::BTreeSet;

use camino::{Utf8Path, Utf8PathBuf};
use gurmao_fs::{read_optional_string, replace_file};

use super::{CollectionError, SavedCollection};

/// Default file name, after the local-storage key.
pub const DEFAULT_SAVED_FILE: &str = "gurmao_saved.json";

/// File-backed [`SavedCollection`].
///
/// Every operation re-reads the file, so concurrent writers converge on the
/// last write. A missing file is an empty collection.
///
/// # Examples
///
/// ```no_run
/// use gurmao_core::{JsonFileCollection, SavedCollection};
///
/// let mut saved = JsonFileCollection::new("gurmao_saved.json");
/// saved.save("noir-table").expect("persist saved restaurant");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileCollection {
    path: Utf8PathBuf,
}

impl JsonFileCollection {
    /// Create a collection backed by `path`. No I/O happens until first use.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeSet<String>, CollectionError> {
        let contents =
            read_optional_string(&self.path).map_err(|source| CollectionError::Read {
                path: self.path.clone(),
                source,
            })?;
        let Some(contents) = contents else {
            return Ok(BTreeSet::new());
        };
        serde_json::from_str(&contents).map_err(|source| CollectionError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn store(&self, ids: &BTreeSet<String>) -> Result<(), CollectionError> {
        let payload = serde_json::to_vec(ids).map_err(|source| CollectionError::Serialise {
            path: self.path.clone(),
            source,
        })?;
        replace_file(&self.path, &payload).map_err(|source| CollectionError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn update(
        &self,
        apply: impl FnOnce(&mut BTreeSet<String>) -> bool,
    ) -> Result<bool, CollectionError> {
        let mut ids = self.load()?;
        if apply(&mut ids) {
            self.store(&ids)?;
        }
        Ok(true)
    }
}

impl SavedCollection for JsonFileCollection {
    fn is_saved(&self, id: &str) -> Result<bool, CollectionError> {
        Ok(self.load()?.contains(id))
    }

    fn save(&mut self, id: &str) -> Result<bool, CollectionError> {
        self.update(|ids| ids.insert(id.to_owned()))
    }

    fn unsave(&mut self, id: &str) -> Result<bool, CollectionError> {
        self.update(|ids| ids.remove(id))
    }

    fn saved_ids(&self) -> Result<BTreeSet<String>, CollectionError> {
        self.load()
    }
}
