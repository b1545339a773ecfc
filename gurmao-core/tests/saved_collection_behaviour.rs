#![cfg(feature = "store-json")]
//! Behavioural coverage for the file-backed saved collection.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use gurmao_core::{CollectionError, JsonFileCollection, SavedCollection};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

struct Store {
    _dir: TempDir,
    path: Utf8PathBuf,
    read: RefCell<Option<Result<Vec<String>, CollectionError>>>,
}

impl Store {
    fn collection(&self) -> JsonFileCollection {
        JsonFileCollection::new(self.path.clone())
    }
}

#[fixture]
fn store() -> Store {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("non UTF-8 tempdir {}", path.display()));
    Store {
        path: root.join("gurmao_saved.json"),
        _dir: dir,
        read: RefCell::new(None),
    }
}

#[given("an empty saved collection file")]
fn empty_file(#[from(store)] store: &Store) {
    std::fs::write(store.path.as_std_path(), b"[]")
        .unwrap_or_else(|err| panic!("seed collection: {err}"));
}

#[given("a saved collection file containing garbage")]
fn garbage_file(#[from(store)] store: &Store) {
    std::fs::write(store.path.as_std_path(), b"noir-table, la-calle")
        .unwrap_or_else(|err| panic!("seed collection: {err}"));
}

#[when("I toggle {id}")]
fn toggle(id: String, #[from(store)] store: &Store) {
    store
        .collection()
        .toggle(&id)
        .unwrap_or_else(|err| panic!("toggle {id}: {err}"));
}

#[when("I save {id}")]
fn save(id: String, #[from(store)] store: &Store) {
    store
        .collection()
        .save(&id)
        .unwrap_or_else(|err| panic!("save {id}: {err}"));
}

#[when("I read the saved ids")]
fn read_ids(#[from(store)] store: &Store) {
    let ids = store
        .collection()
        .saved_ids()
        .map(|ids| ids.into_iter().collect());
    store.read.replace(Some(ids));
}

#[then("{id} is not saved")]
fn not_saved(id: String, #[from(store)] store: &Store) {
    let saved = store
        .collection()
        .is_saved(&id)
        .unwrap_or_else(|err| panic!("read: {err}"));
    assert!(!saved);
}

#[then("the collection file holds {count} ids")]
fn file_holds(count: usize, #[from(store)] store: &Store) {
    let contents = std::fs::read_to_string(store.path.as_std_path())
        .unwrap_or_else(|err| panic!("read file: {err}"));
    let ids: Vec<String> =
        serde_json::from_str(&contents).unwrap_or_else(|err| panic!("parse file: {err}"));
    assert_eq!(ids.len(), count);
}

#[then("a fresh collection lists {first} and {second}")]
fn fresh_lists(first: String, second: String, #[from(store)] store: &Store) {
    let ids: Vec<String> = store
        .collection()
        .saved_ids()
        .unwrap_or_else(|err| panic!("read: {err}"))
        .into_iter()
        .collect();
    assert_eq!(ids, [first, second]);
}

#[then("reading fails with a parse error")]
fn fails_parse(#[from(store)] store: &Store) {
    let read = store.read.borrow();
    match read.as_ref() {
        Some(Err(CollectionError::Parse { path, .. })) => assert_eq!(path, &store.path),
        Some(Ok(ids)) => panic!("expected a parse error, read {ids:?}"),
        Some(Err(other)) => panic!("expected a parse error, found {other}"),
        None => panic!("ids were never read"),
    }
}

#[scenario(path = "tests/features/saved_collection.feature", index = 0)]
fn toggle_twice(store: Store) {
    let _ = store;
}

#[scenario(path = "tests/features/saved_collection.feature", index = 1)]
fn survives_reopen(store: Store) {
    let _ = store;
}

#[scenario(path = "tests/features/saved_collection.feature", index = 2)]
fn corrupt_file(store: Store) {
    let _ = store;
}
