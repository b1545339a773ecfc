//! Saved-restaurant collections.
//!
//! The `SavedCollection` trait is the boolean save/unsave capability keyed by
//! restaurant id. Scoring never depends on it: callers that cannot reach a
//! collection simply render every card as unsaved.

use std::collections::BTreeSet;

use camino::Utf8PathBuf;
use thiserror::Error;

#[cfg(feature = "store-json")]
mod json;

#[cfg(feature = "store-json")]
pub use json::{DEFAULT_SAVED_FILE, JsonFileCollection};

/// Errors raised by collection backends.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The backend cannot be reached.
    #[error("saved collection is unavailable: {reason}")]
    Unavailable {
        /// Description of the outage.
        reason: String,
    },
    /// Reading the backing file failed.
    #[error("failed to read saved collection at {path}")]
    Read {
        /// Backing file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The backing file does not hold a JSON array of ids.
    #[error("saved collection at {path} is not a JSON array of ids")]
    Parse {
        /// Backing file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Encoding the ids failed.
    #[error("failed to encode saved collection for {path}")]
    Serialise {
        /// Backing file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the backing file failed.
    #[error("failed to write saved collection at {path}")]
    Write {
        /// Backing file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

/// Save/unsave capability keyed by restaurant id.
///
/// `save` and `unsave` return `true` once the change is recorded, including
/// when it was already in effect. `toggle` returns the new saved state.
///
/// # Examples
///
/// ```rust
/// use gurmao_core::{MemoryCollection, SavedCollection};
///
/// # fn main() -> Result<(), gurmao_core::CollectionError> {
/// let mut saved = MemoryCollection::default();
/// assert!(saved.toggle("noir-table")?);
/// assert!(saved.is_saved("noir-table")?);
/// assert!(!saved.toggle("noir-table")?);
/// # Ok(())
/// # }
/// ```
pub trait SavedCollection {
    /// Report whether `id` is saved.
    ///
    /// # Errors
    /// Returns [`CollectionError`] when the backend cannot be read.
    fn is_saved(&self, id: &str) -> Result<bool, CollectionError>;

    /// Save `id`.
    ///
    /// # Errors
    /// Returns [`CollectionError`] when the backend cannot be updated.
    fn save(&mut self, id: &str) -> Result<bool, CollectionError>;

    /// Remove `id`.
    ///
    /// # Errors
    /// Returns [`CollectionError`] when the backend cannot be updated.
    fn unsave(&mut self, id: &str) -> Result<bool, CollectionError>;

    /// All saved ids in ascending order.
    ///
    /// # Errors
    /// Returns [`CollectionError`] when the backend cannot be read.
    fn saved_ids(&self) -> Result<BTreeSet<String>, CollectionError>;

    /// Flip the saved state of `id` and return the new state.
    ///
    /// # Errors
    /// Propagates errors from the underlying read and write.
    fn toggle(&mut self, id: &str) -> Result<bool, CollectionError> {
        if self.is_saved(id)? {
            self.unsave(id)?;
            Ok(false)
        } else {
            self.save(id)?;
            Ok(true)
        }
    }
}

/// In-memory collection for anonymous sessions and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCollection {
    ids: BTreeSet<String>,
}

impl MemoryCollection {
    /// Create a collection pre-populated with `ids`.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl SavedCollection for MemoryCollection {
    fn is_saved(&self, id: &str) -> Result<bool, CollectionError> {
        Ok(self.ids.contains(id))
    }

    fn save(&mut self, id: &str) -> Result<bool, CollectionError> {
        self.ids.insert(id.to_owned());
        Ok(true)
    }

    fn unsave(&mut self, id: &str) -> Result<bool, CollectionError> {
        self.ids.remove(id);
        Ok(true)
    }

    fn saved_ids(&self) -> Result<BTreeSet<String>, CollectionError> {
        Ok(self.ids.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn saved() -> MemoryCollection {
        MemoryCollection::with_ids(["ember-steak"])
    }

    #[rstest]
    fn save_is_idempotent(mut saved: MemoryCollection) {
        assert!(saved.save("ember-steak").expect("save"));
        assert_eq!(saved.saved_ids().expect("ids").len(), 1);
    }

    #[rstest]
    fn unsave_of_missing_id_succeeds(mut saved: MemoryCollection) {
        assert!(saved.unsave("la-calle").expect("unsave"));
        assert!(saved.is_saved("ember-steak").expect("read"));
    }

    #[rstest]
    fn toggle_flips_state(mut saved: MemoryCollection) {
        assert!(!saved.toggle("ember-steak").expect("toggle off"));
        assert!(!saved.is_saved("ember-steak").expect("read"));
        assert!(saved.toggle("ember-steak").expect("toggle on"));
        assert!(saved.is_saved("ember-steak").expect("read"));
    }
}
