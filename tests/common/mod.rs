use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory used as `GEMFORM_HOME` for one test.
pub fn setup_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// CLI command with plain output and config isolated under `home`.
pub fn cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gemform_cli").expect("binary built");
    cmd.env("GEMFORM_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub const RING_VALUES: &str = r#"{
    "category": "Ring",
    "type": "Alliance",
    "metal": "Gold",
    "carat": "18",
    "weightFrom": "5",
    "ringSize": {"from": "52"},
    "stoneType": "Diamond",
    "email": "a@b.com",
    "phone": "123",
    "name": "X"
}"#;
