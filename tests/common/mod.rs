//! Shared testing utilities for unitparams CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Bundled UV parameter document.
#[allow(dead_code)]
pub fn sample_document() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src/assets/database/uv.yaml")
}

/// Testing harness providing an isolated database directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    database: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty database directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let database = root.path().join("database");
        fs::create_dir_all(&database).expect("Failed to create test database directory");
        Self { root, database }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the scratch database directory.
    pub fn database(&self) -> &Path {
        &self.database
    }

    /// Write `<technology>.yaml` into the scratch database.
    pub fn write_document(&self, technology: &str, content: &str) -> PathBuf {
        let path = self.database.join(format!("{}.yaml", technology));
        fs::write(&path, content).expect("Failed to write parameter document");
        path
    }

    /// Write an arbitrary file under the harness root.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Build a command for the compiled binary using the embedded database.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("unitparams").expect("Failed to locate unitparams binary");
        cmd.current_dir(self.root.path())
            .env_remove("UNITPARAMS_DATABASE")
            .env_remove("UNITPARAMS_LOG");
        cmd
    }

    /// Build a command for the compiled binary pointed at the scratch database.
    pub fn cli_with_database(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("UNITPARAMS_DATABASE", &self.database);
        cmd
    }
}
