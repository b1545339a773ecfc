//! Test helpers for staging catalog and saved-collection files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    gurmao_fs::replace_file(path, contents).expect("write test file");
}

pub(super) fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir")
}

/// A one-restaurant catalog that relies on the built-in profile tables.
pub(super) const BISTRO_CATALOG: &str = r#"{
  "restaurants": [
    {
      "id": "praha-bistro",
      "name": "Praha Bistro",
      "vibe": "CALM",
      "city": "Praha",
      "priceLevel": 2,
      "groupSize": [2, 4],
      "keywords": ["bistro", "káva"]
    }
  ]
}"#;

pub(super) fn output_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should hold JSON")
}
