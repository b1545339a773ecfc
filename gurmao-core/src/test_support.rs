//! Test-only catalog fixtures and collaborators used by unit and behaviour
//! tests across the workspace.

use std::collections::BTreeSet;

use crate::{
    Catalog, CollectionError, GroupSizes, PriceLevel, Restaurant, SavedCollection, Vibe,
};

/// Build a price level from a literal known to be in range.
///
/// # Panics
/// Panics when `value` is outside `1..=4`.
pub fn price(value: u8) -> PriceLevel {
    match PriceLevel::new(value) {
        Ok(level) => level,
        Err(err) => panic!("test price level: {err}"),
    }
}

/// A bare restaurant with a single supported group size of two.
pub fn restaurant(id: &str, vibe: Vibe, city: &str, price_level: u8) -> Restaurant {
    Restaurant::new(id, id, vibe, city, price(price_level)).with_group_sizes(GroupSizes::from([2]))
}

/// The anniversary dinner spot used in end-to-end scoring examples:
/// LUXE in Praha, price level 4, for two or four, listing "výročí".
pub fn anniversary_restaurant() -> Restaurant {
    Restaurant::new("a", "A", Vibe::Luxe, "Praha", price(4))
        .with_group_sizes(GroupSizes::from([2, 4]))
        .with_occasions(["výročí"])
        .with_description("Svíčky a ticho.")
}

/// Pair `restaurants` with the built-in profile tables.
///
/// # Panics
/// Panics when the restaurants fail catalog validation.
pub fn catalog_of(restaurants: Vec<Restaurant>) -> Catalog {
    match Catalog::with_builtin_profiles(restaurants) {
        Ok(catalog) => catalog,
        Err(err) => panic!("test catalog: {err}"),
    }
}

/// `SavedCollection` whose backend is always down.
#[derive(Debug, Copy, Clone, Default)]
pub struct UnavailableCollection;

impl UnavailableCollection {
    fn outage() -> CollectionError {
        CollectionError::Unavailable {
            reason: "backend offline".to_owned(),
        }
    }
}

impl SavedCollection for UnavailableCollection {
    fn is_saved(&self, _id: &str) -> Result<bool, CollectionError> {
        Err(Self::outage())
    }

    fn save(&mut self, _id: &str) -> Result<bool, CollectionError> {
        Err(Self::outage())
    }

    fn unsave(&mut self, _id: &str) -> Result<bool, CollectionError> {
        Err(Self::outage())
    }

    fn saved_ids(&self) -> Result<BTreeSet<String>, CollectionError> {
        Err(Self::outage())
    }
}
