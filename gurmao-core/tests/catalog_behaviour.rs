//! Behavioural coverage for loading catalog documents.

use std::cell::RefCell;

use gurmao_core::{Catalog, CatalogError, CatalogStore, Mood, Vibe};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

fn document(restaurants: &[&str]) -> String {
    format!(r#"{{"restaurants":[{}]}}"#, restaurants.join(","))
}

fn restaurant(id: &str, vibe: &str, price_level: u8) -> String {
    format!(
        r#"{{"id":"{id}","name":"{id}","vibe":"{vibe}","city":"Praha","priceLevel":{price_level},"groupSize":2}}"#
    )
}

#[fixture]
fn source() -> RefCell<String> {
    RefCell::new(String::new())
}

#[fixture]
fn loaded() -> RefCell<Option<Result<Catalog, CatalogError>>> {
    RefCell::new(None)
}

fn with_catalog(
    loaded: &RefCell<Option<Result<Catalog, CatalogError>>>,
    check: impl FnOnce(&Catalog),
) {
    let borrowed = loaded.borrow();
    match borrowed.as_ref() {
        Some(Ok(catalog)) => check(catalog),
        Some(Err(err)) => panic!("catalog failed to load: {err}"),
        None => panic!("catalog was never loaded"),
    }
}

#[given("a catalog document with one restaurant and no profiles")]
fn one_restaurant(#[from(source)] source: &RefCell<String>) {
    source.replace(document(&[&restaurant("bistro", "CALM", 2)]));
}

#[given("a catalog document with a restaurant of vibe {vibe}")]
fn custom_vibe(vibe: String, #[from(source)] source: &RefCell<String>) {
    source.replace(document(&[&restaurant("bistro", &vibe, 2)]));
}

#[given("a catalog document listing the same restaurant twice")]
fn duplicated(#[from(source)] source: &RefCell<String>) {
    let entry = restaurant("bistro", "CALM", 2);
    source.replace(document(&[&entry, &entry]));
}

#[given("a catalog document with a restaurant at price level {level}")]
fn priced(level: u8, #[from(source)] source: &RefCell<String>) {
    source.replace(document(&[&restaurant("bistro", "CALM", level)]));
}

#[when("the catalog is loaded")]
fn load(
    #[from(source)] source: &RefCell<String>,
    #[from(loaded)] loaded: &RefCell<Option<Result<Catalog, CatalogError>>>,
) {
    loaded.replace(Some(Catalog::from_json_str(&source.borrow())));
}

#[then("the catalog holds {count} restaurant")]
fn holds(count: usize, #[from(loaded)] loaded: &RefCell<Option<Result<Catalog, CatalogError>>>) {
    with_catalog(loaded, |catalog| assert_eq!(catalog.len(), count));
}

#[then("the romantika mood profile is available")]
fn romantika_available(#[from(loaded)] loaded: &RefCell<Option<Result<Catalog, CatalogError>>>) {
    with_catalog(loaded, |catalog| {
        let profile = catalog
            .mood_profile(Mood::Romantika)
            .unwrap_or_else(|| panic!("built-in romantika profile missing"));
        assert!(profile.accepts_vibe(&Vibe::Luxe));
    });
}

#[then("the restaurant seats exactly {size} people")]
fn seats(size: u8, #[from(loaded)] loaded: &RefCell<Option<Result<Catalog, CatalogError>>>) {
    with_catalog(loaded, |catalog| {
        let sizes: Vec<u8> = catalog.restaurants()[0].group_sizes.iter().collect();
        assert_eq!(sizes, [size]);
    });
}

#[then("the restaurant vibe is {vibe}")]
fn vibe_is(vibe: String, #[from(loaded)] loaded: &RefCell<Option<Result<Catalog, CatalogError>>>) {
    with_catalog(loaded, |catalog| {
        let stored = &catalog.restaurants()[0].vibe;
        assert_eq!(stored.as_str(), vibe);
        assert!(!stored.is_known());
    });
}

#[then("loading fails with a duplicate id error")]
fn fails_duplicate(#[from(loaded)] loaded: &RefCell<Option<Result<Catalog, CatalogError>>>) {
    let borrowed = loaded.borrow();
    match borrowed.as_ref() {
        Some(Err(CatalogError::DuplicateId { id })) => assert_eq!(id, "bistro"),
        other => panic!("expected DuplicateId, found {other:?}"),
    }
}

#[then("loading fails with a parse error")]
fn fails_parse(#[from(loaded)] loaded: &RefCell<Option<Result<Catalog, CatalogError>>>) {
    let borrowed = loaded.borrow();
    match borrowed.as_ref() {
        Some(Err(CatalogError::Parse { .. })) => {}
        other => panic!("expected Parse, found {other:?}"),
    }
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn builtin_profiles_fill_gaps(
    source: RefCell<String>,
    loaded: RefCell<Option<Result<Catalog, CatalogError>>>,
) {
    let _ = (source, loaded);
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn scalar_group_size(
    source: RefCell<String>,
    loaded: RefCell<Option<Result<Catalog, CatalogError>>>,
) {
    let _ = (source, loaded);
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn unknown_vibe(
    source: RefCell<String>,
    loaded: RefCell<Option<Result<Catalog, CatalogError>>>,
) {
    let _ = (source, loaded);
}

#[scenario(path = "tests/features/catalog.feature", index = 3)]
fn duplicate_ids(
    source: RefCell<String>,
    loaded: RefCell<Option<Result<Catalog, CatalogError>>>,
) {
    let _ = (source, loaded);
}

#[scenario(path = "tests/features/catalog.feature", index = 4)]
fn price_out_of_range(
    source: RefCell<String>,
    loaded: RefCell<Option<Result<Catalog, CatalogError>>>,
) {
    let _ = (source, loaded);
}
