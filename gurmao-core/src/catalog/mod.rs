//! The catalog store: restaurants plus the mood and occasion profile tables.
//!
//! The `CatalogStore` trait defines the read-only lookups the scorer needs.
//! [`Catalog`] is the in-memory implementation, loaded once at start-up from
//! the built-in data or a JSON file and never mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::{Mood, MoodProfile, Occasion, OccasionProfile, Restaurant};

mod builtin;

/// Read-only access to the restaurant catalog and profile tables.
///
/// Missing profiles are reported as `None`; the scorer treats them as
/// "skip this factor" rather than as a failure.
///
/// # Examples
///
/// ```rust
/// use gurmao_core::{CatalogStore, Mood, MoodProfile, Occasion, OccasionProfile, Restaurant};
///
/// struct EmptyStore;
///
/// impl CatalogStore for EmptyStore {
///     fn restaurants(&self) -> &[Restaurant] {
///         &[]
///     }
///     fn mood_profile(&self, _mood: Mood) -> Option<&MoodProfile> {
///         None
///     }
///     fn occasion_profile(&self, _occasion: Occasion) -> Option<&OccasionProfile> {
///         None
///     }
/// }
///
/// assert!(EmptyStore.restaurants().is_empty());
/// assert!(EmptyStore.mood_profile(Mood::Klid).is_none());
/// ```
pub trait CatalogStore {
    /// All restaurants in declaration order.
    fn restaurants(&self) -> &[Restaurant];

    /// Profile for `mood`, if the table has one.
    fn mood_profile(&self, mood: Mood) -> Option<&MoodProfile>;

    /// Profile for `occasion`, if the table has one.
    fn occasion_profile(&self, occasion: Occasion) -> Option<&OccasionProfile>;
}

/// In-memory catalog.
///
/// # Examples
/// ```
/// use gurmao_core::{Catalog, CatalogStore, Mood};
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.restaurants().len(), 3);
/// assert!(catalog.mood_profile(Mood::Romantika).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    moods: HashMap<Mood, MoodProfile>,
    occasions: HashMap<Occasion, OccasionProfile>,
}

/// Errors returned while building or loading a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two restaurants share an identifier.
    #[error("restaurant id '{id}' appears more than once")]
    DuplicateId {
        /// Repeated identifier.
        id: String,
    },
    /// A restaurant supports no party size at all.
    #[error("restaurant '{id}' must support at least one group size")]
    EmptyGroupSizes {
        /// Identifier of the affected restaurant.
        id: String,
    },
    /// The catalog document could not be decoded.
    #[error("failed to parse catalog JSON")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct CatalogDocument {
    restaurants: Vec<Restaurant>,
    #[serde(default)]
    moods: Option<HashMap<Mood, MoodProfile>>,
    #[serde(default)]
    occasions: Option<HashMap<Occasion, OccasionProfile>>,
}

impl Catalog {
    /// Validates and constructs a [`Catalog`].
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] when an id repeats and
    /// [`CatalogError::EmptyGroupSizes`] when a restaurant lists no group size.
    pub fn new(
        restaurants: Vec<Restaurant>,
        moods: HashMap<Mood, MoodProfile>,
        occasions: HashMap<Occasion, OccasionProfile>,
    ) -> Result<Self, CatalogError> {
        validate_restaurants(&restaurants)?;
        Ok(Self {
            restaurants,
            moods,
            occasions,
        })
    }

    /// Validates `restaurants` and pairs them with the built-in profile
    /// tables.
    ///
    /// # Errors
    /// See [`Catalog::new`].
    pub fn with_builtin_profiles(restaurants: Vec<Restaurant>) -> Result<Self, CatalogError> {
        Self::new(
            restaurants,
            builtin::mood_profiles(),
            builtin::occasion_profiles(),
        )
    }

    /// The catalog shipped with the site: three restaurants and the full
    /// profile tables.
    pub fn builtin() -> Self {
        Self {
            restaurants: builtin::restaurants(),
            moods: builtin::mood_profiles(),
            occasions: builtin::occasion_profiles(),
        }
    }

    /// Parse a catalog document from JSON text.
    ///
    /// The document holds `restaurants` and, optionally, `moods` and
    /// `occasions`. Omitted tables fall back to the built-in profiles.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON and the validation
    /// errors of [`Catalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse { source })?;
        Self::from_document(document)
    }

    /// Parse a catalog document from a reader. See [`Catalog::from_json_str`].
    ///
    /// # Errors
    /// As for [`Catalog::from_json_str`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_reader(reader).map_err(|source| CatalogError::Parse { source })?;
        Self::from_document(document)
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        Self::new(
            document.restaurants,
            document.moods.unwrap_or_else(builtin::mood_profiles),
            document.occasions.unwrap_or_else(builtin::occasion_profiles),
        )
    }

    /// Look a restaurant up by id.
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Report whether the catalog has no restaurants.
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl CatalogStore for Catalog {
    fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    fn mood_profile(&self, mood: Mood) -> Option<&MoodProfile> {
        self.moods.get(&mood)
    }

    fn occasion_profile(&self, occasion: Occasion) -> Option<&OccasionProfile> {
        self.occasions.get(&occasion)
    }
}

fn validate_restaurants(restaurants: &[Restaurant]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(restaurants.len());
    for restaurant in restaurants {
        if !seen.insert(restaurant.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: restaurant.id.clone(),
            });
        }
        if restaurant.group_sizes.is_empty() {
            return Err(CatalogError::EmptyGroupSizes {
                id: restaurant.id.clone(),
            });
        }
    }
    Ok(())
}
