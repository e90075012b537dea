//! Shared testing utilities for desktop-calculator CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled binary with the emulated `$HOME`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("desktop-calculator")
            .expect("Failed to locate desktop-calculator binary");
        cmd.current_dir(self.home()).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    /// Path of the default config file under `$HOME`.
    pub fn config_path(&self) -> PathBuf {
        self.home().join(".desktop-calculator").join("config.toml")
    }

    /// Write the default config file.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(path, content).expect("Failed to write config");
    }

    /// Write a file relative to `$HOME` and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Path of the default history file under `$HOME`.
    pub fn history_path(&self) -> PathBuf {
        self.home().join(".desktop-calculator").join("history")
    }
}
