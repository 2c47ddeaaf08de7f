#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Watched directory plus an isolated state directory
pub struct TestMonitor {
    pub temp_dir: TempDir,
}

impl TestMonitor {
    /// Create a fixture with an empty watched directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path().join("watched"))?;
        Ok(Self { temp_dir })
    }

    /// Directory the monitor scans
    pub fn watched(&self) -> PathBuf {
        self.temp_dir.path().join("watched")
    }

    /// Directory the monitor keeps its snapshots in
    pub fn state_dir(&self) -> PathBuf {
        self.temp_dir.path().join("state")
    }

    /// Write `name` in the watched directory with a fixed mtime
    pub fn write_file(&self, name: &str, mtime_secs: i64) -> Result<()> {
        let path = self.watched().join(name);
        fs::write(&path, format!("{name} @ {mtime_secs}"))?;
        set_file_mtime(&path, FileTime::from_unix_time(mtime_secs, 0))?;
        Ok(())
    }

    /// The binary, with state and configuration isolated to this fixture
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("filecheck")?;
        cmd.env("FILECHECK_STATE_DIR", self.state_dir())
            .env("FILECHECK_CONFIG_PATH", self.config_path())
            .env_remove("FILECHECK_LOG");
        Ok(cmd)
    }

    /// Run the binary against the watched directory
    pub fn check(&self, pattern: &str) -> Result<std::process::Output> {
        Ok(self
            .command()?
            .arg("1")
            .arg(self.watched())
            .arg(pattern)
            .output()?)
    }

    /// Path of the fixture's config file (absent unless written)
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("filecheck.toml")
    }

    /// Fixture root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Stdout lines sorted, so assertions do not depend on listing order
pub fn sorted_lines(stdout: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}
